use crate::error::NodeviewError;
use crate::nodes::{NodeRecord, NodeResponse};

/// Capability interface for fetching the raw node list.
///
/// The viewer core only sees this trait, so everything downstream of the
/// fetch (marker loading, picking, interaction) is testable without a
/// live HTTP server.
pub trait NodeSource {
    /// Fetch the raw node records from the source.
    fn fetch_nodes(&self) -> Result<Vec<NodeRecord>, NodeviewError>;
}

/// Node source backed by a single unauthenticated HTTP GET returning
/// `{ "nodes": [ .. ] }`. No retry, no pagination.
pub struct HttpNodeSource {
    endpoint: String,
}

impl HttpNodeSource {
    /// Create a source for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// The configured endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl NodeSource for HttpNodeSource {
    fn fetch_nodes(&self) -> Result<Vec<NodeRecord>, NodeviewError> {
        log::info!("fetching nodes from {}", self.endpoint);

        let body = ureq::get(&self.endpoint)
            .call()
            .map_err(|e| NodeviewError::Fetch(e.to_string()))?
            .into_body()
            .read_to_string()
            .map_err(|e| NodeviewError::Fetch(e.to_string()))?;

        let response: NodeResponse = serde_json::from_str(&body)?;
        log::debug!("fetched {} node records", response.nodes.len());
        Ok(response.nodes)
    }
}
