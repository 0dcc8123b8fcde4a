//! Ordered post collection

use chrono::Utc;

use crate::content::{seed_posts, Post};
use crate::storage::{Result, StorageAdapter};

/// Storage key of the post array
pub const POSTS_KEY: &str = "posts";

/// Result of listing posts
#[derive(Debug, Clone)]
pub struct PostList {
    /// Posts in display order, newest first
    pub posts: Vec<Post>,
    /// True when nothing is persisted and the seed posts were substituted
    pub using_defaults: bool,
}

/// Read/modify/write access to the persisted posts
#[derive(Debug, Clone)]
pub struct PostStore {
    storage: StorageAdapter,
}

impl PostStore {
    pub fn new(storage: StorageAdapter) -> Self {
        Self { storage }
    }

    /// Posts exactly as persisted; empty when nothing has been saved
    pub fn persisted(&self) -> Result<Vec<Post>> {
        Ok(self.storage.load(POSTS_KEY)?.unwrap_or_default())
    }

    /// Persisted posts, or the seed posts when none are stored
    pub fn list(&self) -> Result<PostList> {
        let posts = self.persisted()?;
        if posts.is_empty() {
            return Ok(PostList {
                posts: seed_posts(Utc::now()),
                using_defaults: true,
            });
        }

        Ok(PostList {
            posts,
            using_defaults: false,
        })
    }

    /// Insert `post` at the front and persist
    pub fn add(&self, post: Post) -> Result<()> {
        let mut posts = self.persisted()?;
        tracing::info!("Adding post {:?} ({})", post.title, post.id);
        posts.insert(0, post);
        self.save(&posts)
    }

    /// Replace the persisted sequence
    pub fn save(&self, posts: &[Post]) -> Result<()> {
        self.storage.save(POSTS_KEY, posts)
    }

    /// Look a post up by id among the listed posts
    pub fn find_by_id(&self, id: &str) -> Result<Option<Post>> {
        Ok(self.list()?.posts.into_iter().find(|p| p.id == id))
    }
}
