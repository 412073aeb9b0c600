//! # contract: the seam between the aggregator and the network
//!
//! The aggregator never talks HTTP itself. It asks a [`Fetcher`] for the raw
//! bytes of one project's MAINTAINERS file and decodes them on its own.
//!
//! ## Implementors
//! - [`crate::fetch::HttpFetcher`]: the production client (GET against a raw
//!   file host such as `raw.githubusercontent.com`).
//! - `MockFetcher`: generated by `mockall`, exported under the
//!   `test-export-mocks` feature so tests in dependent crates can script
//!   per-project payloads and failures.
//!
//! ## Errors
//! Fetch failures are boxed trait objects. The aggregator attaches the
//! `org/project` context, so implementors only describe the transport failure.

use async_trait::async_trait;

use mockall::automock;

/// Error type for the Fetcher trait (boxed, transport specific).
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// Retrieves the MAINTAINERS declaration of a single project.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Return the raw bytes of the declaration file of `org/project`.
    async fn fetch(&self, org: &str, project: &str) -> Result<Vec<u8>, FetchError>;
}
