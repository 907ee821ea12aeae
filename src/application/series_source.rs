// Source trait for raw series responses
use crate::application::error::FetchError;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Fetch the raw response body for `GET /data/<field>`.
    /// A non-success status must be reported as `FetchError::Request`.
    async fn fetch_raw(&self, field: &str) -> Result<Bytes, FetchError>;
}
