//! Post submission
//!
//! Turns the fields of the editor form into a new [`Post`] and prepends it
//! to the [`PostStore`]. Posts are never edited or deleted afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::Post;
use crate::storage::StorageError;
use crate::store::PostStore;

/// Notice shown when a required field is left empty
pub const MISSING_FIELDS_NOTICE: &str = "Please fill in the title and content.";

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("{}", MISSING_FIELDS_NOTICE)]
    MissingFields,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Raw values of the editor form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub publisher: String,
    #[serde(rename = "cover-image", alias = "image")]
    pub image: String,
}

impl PostForm {
    /// Title and content are required
    pub fn validate(&self) -> Result<(), EditorError> {
        if self.title.is_empty() || self.content.is_empty() {
            return Err(EditorError::MissingFields);
        }
        Ok(())
    }

    /// Build the post record, stamping `now` as its date
    pub fn into_post(self, now: DateTime<Utc>) -> Result<Post, EditorError> {
        self.validate()?;

        let mut post = Post::new(self.title, self.content, now);
        post.excerpt = self.excerpt;
        post.publisher = optional(self.publisher);
        post.image = optional(self.image);
        Ok(post)
    }
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Validate `form` and prepend the resulting post to `store`
///
/// Nothing is written when validation fails.
pub fn submit(store: &PostStore, form: PostForm) -> Result<Post, EditorError> {
    let post = form.into_post(Utc::now())?;
    store.add(post.clone())?;
    Ok(post)
}
