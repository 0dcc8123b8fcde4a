//! Create a new post

use anyhow::Result;

use crate::editor::{self, PostForm};
use crate::Blog;

/// Validate and publish a post built from command-line fields
pub fn create_post(blog: &Blog, form: PostForm) -> Result<()> {
    let post = editor::submit(&blog.posts(), form)?;
    println!("Created: {} [{}]", post.title, post.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::storage::StorageAdapter;

    #[test]
    fn test_missing_content_is_an_error() {
        let blog = Blog::with_storage(SiteConfig::default(), StorageAdapter::in_memory());
        let form = PostForm {
            title: "Only a title".to_string(),
            ..Default::default()
        };
        let err = create_post(&blog, form).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in the title and content.");
        assert!(blog.posts().persisted().unwrap().is_empty());
    }
}
