use super::{PortSource, decode_ports_document};
use crate::core::{PortError, Record, Result};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Fetches the ports document over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PortSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Record>> {
        debug!(url = %self.url, "fetching ports document");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortError::fetch(format!(
                "Failed to fetch ports data: HTTP {status}"
            )));
        }

        let document: JsonValue = response
            .json()
            .await
            .map_err(|e| PortError::fetch(format!("malformed ports document: {e}")))?;

        decode_ports_document(document)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
