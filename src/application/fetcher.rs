// Series fetcher - Use case for loading one field into the store
use crate::application::error::FetchError;
use crate::application::series_source::SeriesSource;
use crate::application::series_store::SeriesStore;
use crate::domain::series::{reshape, Series};
use std::sync::Arc;

#[derive(Clone)]
pub struct SeriesFetcher {
    source: Arc<dyn SeriesSource>,
    store: SeriesStore,
}

impl SeriesFetcher {
    pub fn new(source: Arc<dyn SeriesSource>, store: SeriesStore) -> Self {
        Self { source, store }
    }

    /// Fetch `field`, reshape it into points and replace its store entry.
    /// The store is left untouched when any step fails.
    pub async fn fetch_series(&self, field: &str) -> Result<(), FetchError> {
        let raw = self.source.fetch_raw(field).await?;

        let body: serde_json::Value =
            serde_json::from_slice(&raw).map_err(|source| FetchError::Parse {
                field: field.to_string(),
                source,
            })?;
        tracing::debug!("Raw response for {}: {}", field, body);

        let reshaped = reshape(&body, field).map_err(|problem| FetchError::Shape {
            field: field.to_string(),
            reason: problem.to_string(),
        })?;

        if let Some(values) = reshaped.mismatch {
            tracing::warn!(
                "Shape mismatch for {}: {} timestamps but {} values",
                field,
                reshaped.points.len(),
                values
            );
        }
        tracing::debug!("Reshaped {}: {:?}", field, reshaped.points);
        tracing::info!("Fetched {} points for {}", reshaped.points.len(), field);

        self.store.put(field, reshaped.points);
        Ok(())
    }

    pub fn series(&self, field: &str) -> Option<Series> {
        self.store.get(field)
    }
}
