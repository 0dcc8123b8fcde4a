//! jdm-blog: a tiny blog engine with simulated engagement metrics
//!
//! Posts and metrics live in a string-keyed store of JSON values. The
//! crate renders a feed, a single-post view and a submission form by plain
//! string templating, and serves them from a small local server that also
//! runs the visitor simulation.

pub mod commands;
pub mod config;
pub mod content;
pub mod editor;
pub mod helpers;
pub mod server;
pub mod storage;
pub mod store;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use storage::{FileStorage, StorageAdapter};
use store::{MetricsStore, PostStore};

/// Name of the configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The main blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Shared key-value storage
    pub storage: StorageAdapter,
}

impl Blog {
    /// Create a new blog from a directory, backed by its storage file
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let storage_path = base_dir.join(&config.storage_file);
        tracing::debug!("Using storage file {:?}", storage_path);
        let storage = StorageAdapter::new(Arc::new(FileStorage::new(storage_path)));

        Ok(Self {
            config,
            base_dir,
            storage,
        })
    }

    /// Create a blog over an existing storage backend
    pub fn with_storage(config: config::SiteConfig, storage: StorageAdapter) -> Self {
        Self {
            config,
            base_dir: PathBuf::from("."),
            storage,
        }
    }

    /// Path of the file-backed store
    pub fn storage_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.storage_file)
    }

    pub fn posts(&self) -> PostStore {
        PostStore::new(self.storage.clone())
    }

    pub fn metrics(&self) -> MetricsStore {
        MetricsStore::new(self.storage.clone())
    }

    /// Template helpers for this site
    pub fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.config.clone())
    }

    /// Remove all stored posts and metrics
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
