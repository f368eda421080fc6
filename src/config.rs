use crate::query::DEFAULT_PAGE_SIZE;
use crate::source::{FileSource, HttpSource, PortSource};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Public sea ports dataset, keyed by port code.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/marchah/sea-ports/refs/heads/master/lib/ports.json";

/// Where the seed document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Http { url: String },
    File(PathBuf),
}

impl SourceConfig {
    pub fn build(&self) -> Arc<dyn PortSource> {
        match self {
            Self::Http { url } => Arc::new(HttpSource::new(url.clone())),
            Self::File(path) => Arc::new(FileSource::new(path.clone())),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Http {
            url: DEFAULT_SOURCE_URL.to_string(),
        }
    }
}

/// Artificial delay per operation. Reads are lighter than writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub count: Duration,
    pub get: Duration,
    pub list: Duration,
    pub options: Duration,
    pub write: Duration,
}

impl LatencyProfile {
    pub fn none() -> Self {
        Self {
            count: Duration::ZERO,
            get: Duration::ZERO,
            list: Duration::ZERO,
            options: Duration::ZERO,
            write: Duration::ZERO,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::none()
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            count: Duration::from_millis(200),
            get: Duration::from_millis(200),
            list: Duration::from_millis(300),
            options: Duration::from_millis(300),
            write: Duration::from_millis(500),
        }
    }
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub source: SourceConfig,

    /// Rows per page for new tables
    pub page_size: usize,

    pub latency: LatencyProfile,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            page_size: DEFAULT_PAGE_SIZE,
            latency: LatencyProfile::default(),
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `SEAPORTS_*` variables, falling back to defaults.
    ///
    /// `SEAPORTS_SOURCE_FILE` wins over `SEAPORTS_SOURCE_URL`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = env_var("SEAPORTS_SOURCE_URL") {
            config = config.url(&url);
        }
        if let Some(path) = env_var("SEAPORTS_SOURCE_FILE") {
            config = config.file(path);
        }
        if let Some(size) = env_var("SEAPORTS_PAGE_SIZE") {
            let size = size
                .parse::<usize>()
                .context("SEAPORTS_PAGE_SIZE must be a positive integer")?;
            config = config.page_size(size);
        }
        if let Some(flag) = env_var("SEAPORTS_SIMULATE_LATENCY") {
            let enabled = flag
                .parse::<bool>()
                .context("SEAPORTS_SIMULATE_LATENCY must be true or false")?;
            if !enabled {
                config = config.without_latency();
            }
        }

        anyhow::ensure!(config.page_size > 0, "page size must be at least 1");
        Ok(config)
    }

    /// Fetch the seed document from `url`
    pub fn url(mut self, url: &str) -> Self {
        self.source = SourceConfig::Http {
            url: url.to_string(),
        };
        self
    }

    /// Read the seed document from a local file
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = SourceConfig::File(path.into());
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    pub fn without_latency(self) -> Self {
        self.latency(LatencyProfile::none())
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
