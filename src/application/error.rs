// Error types for the fetch/render pipeline
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {field} failed with status {status}")]
    Request { field: String, status: u16 },

    #[error("request for {field} could not be sent: {source}")]
    Transport {
        field: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response for {field} is not valid JSON: {source}")]
    Parse {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response for {field} has unexpected shape: {reason}")]
    Shape { field: String, reason: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum MountError {
    #[error("mount point #{id} is not present")]
    Missing { id: String },
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Mount(#[from] MountError),

    #[error("no series stored for {0}")]
    NotFetched(String),
}
