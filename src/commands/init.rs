//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const CONFIG_TEMPLATE: &str = r#"# JDM Blog Configuration

# Site
title: JDM Blog
subtitle: Notes on AI in education
author: Dr. M. Manikandan
language: en
# IANA timezone for displayed dates, empty for local time
timezone: ''

# URL
root: /

# Storage (JSON key-value file, relative to this directory)
storage_file: storage.json

# Writing
default_publisher: Admin
excerpt_length: 150

# Metrics
visitor_interval: 5
like_pulse_ms: 200

# Server
port: 4000
"#;

/// Initialize a new blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("Already initialized: {:?} exists", config_path);
    }

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    tracing::info!("Created {:?}", config_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: SiteConfig = serde_yaml::from_str(CONFIG_TEMPLATE).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.title, defaults.title);
        assert_eq!(config.storage_file, defaults.storage_file);
        assert_eq!(config.visitor_interval, defaults.visitor_interval);
        assert_eq!(config.fallback_image, defaults.fallback_image);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(dir.path().join(CONFIG_FILE).exists());
        assert!(init_site(dir.path()).is_err());
    }
}
