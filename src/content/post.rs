//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque identifier, unique within the store
    pub id: String,

    /// Post title
    pub title: String,

    /// Short summary shown on the feed
    #[serde(default)]
    pub excerpt: String,

    /// Full body, plain text with newlines
    pub content: String,

    /// Display name of the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Publication timestamp (ISO-8601)
    pub date: DateTime<Utc>,
}

impl Post {
    /// Create a post with a fresh random identifier
    pub fn new(title: String, content: String, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            excerpt: String::new(),
            content,
            publisher: None,
            image: None,
            date,
        }
    }

    /// Publisher name, or `default` when unset or blank
    pub fn publisher_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty(self.publisher.as_deref()).unwrap_or(default)
    }

    /// Image URL, or `fallback` when unset or blank
    pub fn image_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_empty(self.image.as_deref()).unwrap_or(fallback)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Post {
        Post::new(
            "Hello".to_string(),
            "World".to_string(),
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_new_posts_get_distinct_ids() {
        assert_ne!(sample().id, sample().id);
        assert!(Uuid::parse_str(&sample().id).is_ok());
    }

    #[test]
    fn test_publisher_default() {
        let mut post = sample();
        assert_eq!(post.publisher_or("Admin"), "Admin");
        post.publisher = Some(String::new());
        assert_eq!(post.publisher_or("Admin"), "Admin");
        post.publisher = Some("Jane".to_string());
        assert_eq!(post.publisher_or("Admin"), "Jane");
    }

    #[test]
    fn test_image_fallback() {
        let mut post = sample();
        assert_eq!(post.image_or("fallback.jpg"), "fallback.jpg");
        post.image = Some("cover.jpg".to_string());
        assert_eq!(post.image_or("fallback.jpg"), "cover.jpg");
    }

    #[test]
    fn test_reads_records_written_by_the_browser_version() {
        let json = r#"{
            "id": "lrx2k9abc",
            "title": "Hi",
            "excerpt": "",
            "content": "line one\nline two",
            "publisher": "",
            "image": "",
            "date": "2024-01-15T10:30:00.000Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "lrx2k9abc");
        assert_eq!(post.publisher_or("Admin"), "Admin");
        assert_eq!(
            post.date,
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_absent_optionals_are_not_serialized() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("publisher"));
        assert!(!json.contains("image"));
    }
}
