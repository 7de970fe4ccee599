//! Trait abstraction for the package search service to enable mocking in tests

use async_trait::async_trait;
use thiserror::Error;

/// Parameters of a single package lookup.
///
/// `search_term` is the scanned value with surrounding whitespace removed;
/// scanners often send a trailing `\r` or padding that the service would
/// otherwise treat as part of the barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub search_term: String,
    pub shipper: String,
    pub channel: String,
}

/// Transport or server failure while looking up a package
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search service address {address}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("package search failed: {0}")]
    Rpc(#[from] tonic::Status),

    #[error("package search aborted: {0}")]
    Aborted(String),
}

/// Remote lookup of shippable packages
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageSearch: Send + Sync {
    /// Find the sales invoice of the package matching the request.
    /// `Ok(None)` means the service answered but nothing matched.
    async fn search_packages(&self, request: &ScanRequest) -> Result<Option<String>, SearchError>;
}
