//! Package search module for gRPC communication

mod client;
mod traits;

pub use client::{SearchClient, DEFAULT_ADDRESS};
pub use traits::{PackageSearch, ScanRequest, SearchError};

#[cfg(test)]
pub use traits::MockPackageSearch;
