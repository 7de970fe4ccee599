//! gRPC client for the shipment manifest package search service

use super::traits::{PackageSearch, ScanRequest, SearchError};
use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};

// Include the generated proto types
pub mod proto {
    tonic::include_proto!("manifest");
}

use proto::shipment_manifest_client::ShipmentManifestClient;

/// Default search service address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50061";

/// Client for the package search service.
///
/// The underlying channel connects lazily, so creating a client never
/// blocks on the network; connection failures surface on the first lookup.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: ShipmentManifestClient<Channel>,
    address: String,
}

impl SearchClient {
    /// Create a client for the given address. Must be called inside a tokio runtime.
    pub fn new(address: &str) -> Result<Self, SearchError> {
        let endpoint = Endpoint::from_shared(address.to_string()).map_err(|source| {
            SearchError::InvalidAddress {
                address: address.to_string(),
                source,
            }
        })?;

        Ok(Self {
            client: ShipmentManifestClient::new(endpoint.connect_lazy()),
            address: address.to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl PackageSearch for SearchClient {
    async fn search_packages(&self, request: &ScanRequest) -> Result<Option<String>, SearchError> {
        let mut client = self.client.clone();

        let response = client
            .search_packages(tonic::Request::new(proto::SearchPackagesRequest {
                search_term: request.search_term.clone(),
                shipper: request.shipper.clone(),
                channel: request.channel.clone(),
            }))
            .await?;

        Ok(non_empty(response.into_inner().sales_invoice))
    }
}

/// The service reports "no match" as an empty string
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(
            non_empty("SINV-0007".to_string()),
            Some("SINV-0007".to_string())
        );
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let err = SearchClient::new("not a valid uri").unwrap_err();
        assert!(matches!(err, SearchError::InvalidAddress { .. }));
        assert!(err.to_string().contains("not a valid uri"));
    }

    #[tokio::test]
    async fn test_valid_address_builds_lazy_client() {
        let client = SearchClient::new(DEFAULT_ADDRESS).unwrap();
        assert_eq!(client.address(), DEFAULT_ADDRESS);
    }

    #[tokio::test]
    async fn test_unreachable_service_returns_rpc_error() {
        // Reserve a free port, then release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = SearchClient::new(&format!("http://127.0.0.1:{port}")).unwrap();
        let request = ScanRequest {
            search_term: "PKG-001".to_string(),
            shipper: "DELHIVERY".to_string(),
            channel: "AMZ".to_string(),
        };
        let result = client.search_packages(&request).await;
        assert!(matches!(result, Err(SearchError::Rpc(_))));
    }
}
