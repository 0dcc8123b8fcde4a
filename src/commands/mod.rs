//! CLI command implementations

pub mod clean;
pub mod init;
pub mod list;
pub mod metrics;
pub mod new;
pub mod show;
