use reqwest::Client;
use tracing::{debug, info};

use crate::config::CollectorConfig;
use crate::contract::{FetchError, Fetcher};

/// Fetches MAINTAINERS files over HTTP from a raw file host laid out as
/// `{base_url}/{org}/{project}/{branch}/{filename}`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
    branch: String,
    filename: String,
}

impl HttpFetcher {
    pub fn new(
        base_url: impl Into<String>,
        branch: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            branch: branch.into(),
            filename: filename.into(),
        }
    }

    pub fn from_config(config: &CollectorConfig) -> Self {
        Self::new(&config.base_url, &config.branch, &config.filename)
    }

    pub fn maintainers_url(&self, org: &str, project: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.base_url, org, project, self.branch, self.filename
        )
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, org: &str, project: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.maintainers_url(org, project);
        info!(org = %org, project = %project, url = %url, "Loading MAINTAINERS file");

        // Status codes are not checked; an error page fails at decoding.
        let response = self.client.get(&url).send().await.map_err(|e| {
            debug!(error = ?e, url = %url, "Transport error fetching MAINTAINERS file");
            e
        })?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            debug!(error = ?e, url = %url, "Transport error reading MAINTAINERS body");
            e
        })?;

        info!(url = %url, status = %status, bytes = body.len(), "Fetched MAINTAINERS file");
        Ok(body.to_vec())
    }
}
