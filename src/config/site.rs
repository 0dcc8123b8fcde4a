//! Site configuration (_config.yml)

use anyhow::Result;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub language: String,
    pub timezone: String,

    // URL
    pub root: String,

    // Storage
    pub storage_file: String,

    // Writing
    pub default_publisher: String,
    pub fallback_image: String,
    pub cover_fallback_image: String,
    pub excerpt_length: usize,

    // Metrics
    /// Seconds between simulated visitor ticks
    pub visitor_interval: u64,
    /// Duration of the highlight applied to the likes counter
    pub like_pulse_ms: u64,

    // Server
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "JDM Blog".to_string(),
            subtitle: "Notes on AI in education".to_string(),
            author: "Dr. M. Manikandan".to_string(),
            language: "en".to_string(),
            timezone: String::new(),

            root: "/".to_string(),

            storage_file: "storage.json".to_string(),

            default_publisher: "Admin".to_string(),
            fallback_image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80".to_string(),
            cover_fallback_image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80".to_string(),
            excerpt_length: 150,

            visitor_interval: 5,
            like_pulse_ms: 200,

            port: 4000,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Serialize the configuration back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Interval of the visitor simulation timer (never shorter than one second)
    pub fn visitor_interval(&self) -> Duration {
        Duration::from_secs(self.visitor_interval.max(1))
    }

    /// Parsed display timezone, `None` means the machine's local time
    pub fn tz(&self) -> Option<Tz> {
        if self.timezone.is_empty() {
            return None;
        }
        match self.timezone.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(e) => {
                tracing::warn!("Ignoring invalid timezone {:?}: {}", self.timezone, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.default_publisher, "Admin");
        assert_eq!(config.storage_file, "storage.json");
        assert_eq!(config.visitor_interval(), Duration::from_secs(5));
        assert_eq!(config.like_pulse_ms, 200);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
default_publisher: Editorial Team
visitor_interval: 10
timezone: Asia/Kolkata
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.default_publisher, "Editorial Team");
        assert_eq!(config.visitor_interval(), Duration::from_secs(10));
        assert_eq!(config.tz(), Some(chrono_tz::Asia::Kolkata));
        // untouched fields keep their defaults
        assert_eq!(config.excerpt_length, 150);
    }

    #[test]
    fn test_legacy_url_key_is_ignored() {
        let yaml = "url: http://example.com\nroot: /blog/\n";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.root, "/blog/");
        assert!(!config.to_yaml().unwrap().contains("url:"));
    }

    #[test]
    fn test_invalid_timezone_falls_back_to_local() {
        let config = SiteConfig {
            timezone: "Mars/Olympus".to_string(),
            ..Default::default()
        };
        assert_eq!(config.tz(), None);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config = SiteConfig {
            visitor_interval: 0,
            ..Default::default()
        };
        assert_eq!(config.visitor_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_yaml_roundtrip_keeps_storage_file() {
        let config = SiteConfig {
            storage_file: "data/blog.json".to_string(),
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        let parsed: SiteConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.storage_file, "data/blog.json");
    }
}
