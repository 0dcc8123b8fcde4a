//! Post and metrics stores backed by [`StorageAdapter`](crate::storage::StorageAdapter)

mod metrics;
mod posts;

pub use metrics::{Metrics, MetricsStore, MAX_VISITOR_STEP, METRICS_KEY};
pub use posts::{PostList, PostStore, POSTS_KEY};
