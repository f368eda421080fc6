use super::{PortSource, decode_ports_document};
use crate::core::{PortError, Record, Result};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};

/// Reads a local copy of the ports document.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PortSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Record>> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let document: JsonValue = serde_json::from_str(&text).map_err(|e| {
            PortError::fetch(format!(
                "malformed ports document {}: {}",
                self.path.display(),
                e
            ))
        })?;
        decode_ports_document(document)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
