//! Byte transport for source locations
//!
//! The pipeline only needs "give me the bytes at this location". Filesystem
//! sources go through [`FsFetcher`]; [`StaticFetcher`] serves payloads held in
//! memory, which is how embedded datasets and tests feed the pipeline.

use crate::{Error, Result};
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use tracing::debug;

/// Fetch the raw bytes behind a source location
pub trait Fetcher: Send + Sync {
    /// Fetch the complete payload at `location`
    ///
    /// # Errors
    /// * Returns `Error::Fetch` when the payload cannot be retrieved
    fn fetch(&self, location: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Reads source locations as filesystem paths
#[derive(Debug, Clone, Default)]
pub struct FsFetcher {
    base_dir: Option<PathBuf>,
}

impl FsFetcher {
    /// Resolve locations relative to the current directory
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// Resolve relative locations against `base_dir`
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Path a location resolves to
    pub fn resolve(&self, location: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(location),
            None => PathBuf::from(location),
        }
    }
}

impl Fetcher for FsFetcher {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        let path = self.resolve(location);
        debug!("Reading {}", path.display());

        tokio::fs::read(&path).await.map_err(|e| {
            let message = match e.kind() {
                std::io::ErrorKind::NotFound => format!("file not found: {}", path.display()),
                _ => format!("failed to read {}", path.display()),
            };
            Error::fetch(location, message, Some(e))
        })
    }
}

/// Serves payloads registered in memory
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    payloads: HashMap<String, Vec<u8>>,
}

impl StaticFetcher {
    /// Create an empty fetcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payload under a location
    pub fn with_payload(mut self, location: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.payloads.insert(location.into(), bytes.into());
        self
    }
}

impl Fetcher for StaticFetcher {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        self.payloads
            .get(location)
            .cloned()
            .ok_or_else(|| Error::fetch(location, "no payload registered", None))
    }
}
