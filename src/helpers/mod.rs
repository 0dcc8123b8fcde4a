//! Helper functions for page rendering
//!
//! Free functions for URL generation, HTML snippets, dates and numbers,
//! plus [`Helpers`], which binds them to a site configuration.

mod date;
mod html;
mod number;
mod url;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

pub use date::*;
pub use html::*;
pub use number::*;
pub use url::*;

use crate::config::SiteConfig;

/// Helpers bound to one site configuration
#[derive(Debug, Clone)]
pub struct Helpers {
    config: SiteConfig,
    tz: Option<Tz>,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        let tz = config.tz();
        Self { config, tz }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Get url_for helper
    pub fn url_for(&self, path: &str) -> String {
        url_for(&self.config, path)
    }

    /// Link target of the single-post view for `id`
    pub fn post_url(&self, id: &str) -> String {
        post_url(&self.config, id)
    }

    /// Long-form date in the configured timezone
    pub fn date(&self, date: &DateTime<Utc>) -> String {
        match self.tz {
            Some(tz) => long_date(&date.with_timezone(&tz)),
            None => long_date(&date.with_timezone(&chrono::Local)),
        }
    }

    /// Counter with thousands separators
    pub fn count(&self, value: u64) -> String {
        group_thousands(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_uses_configured_timezone() {
        let config = SiteConfig {
            timezone: "Pacific/Auckland".to_string(),
            ..Default::default()
        };
        let helpers = Helpers::new(config);
        // 20:00 UTC on the 15th is already the 16th in Auckland
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 20, 0, 0).unwrap();
        assert_eq!(helpers.date(&date), "January 16, 2024");
    }

    #[test]
    fn test_post_url_uses_root() {
        let config = SiteConfig {
            root: "/blog/".to_string(),
            ..Default::default()
        };
        assert_eq!(Helpers::new(config).post_url("42"), "/blog/post.html?id=42");
    }
}
