//! Content module - post records and seed content

mod post;
mod seed;

pub use post::Post;
pub use seed::seed_posts;
