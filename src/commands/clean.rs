//! Remove stored posts and metrics

use anyhow::Result;

use crate::store::{METRICS_KEY, POSTS_KEY};
use crate::Blog;

/// Drop both records; the blog falls back to seed posts and default metrics
pub fn run(blog: &Blog) -> Result<()> {
    blog.storage.remove(POSTS_KEY)?;
    blog.storage.remove(METRICS_KEY)?;
    tracing::info!("Cleared posts and metrics from {:?}", blog.storage_path());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::editor::{submit, PostForm};
    use crate::storage::StorageAdapter;
    use crate::store::Metrics;

    #[test]
    fn test_clean_restores_defaults() {
        let blog = Blog::with_storage(SiteConfig::default(), StorageAdapter::in_memory());
        blog.metrics().like().unwrap();
        let form = PostForm {
            title: "T".to_string(),
            content: "C".to_string(),
            ..Default::default()
        };
        submit(&blog.posts(), form).unwrap();

        run(&blog).unwrap();

        assert!(blog.posts().list().unwrap().using_defaults);
        assert_eq!(blog.metrics().load().unwrap(), Metrics::default());
    }
}
