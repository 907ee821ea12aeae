// Session store of reshaped series, keyed by field name
use crate::domain::series::Series;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Shared by the fetcher (writer) and the renderer (reader).
/// Entries are replaced wholesale; the last completed write wins.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    inner: Arc<RwLock<HashMap<String, Series>>>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<Series> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(field)
            .cloned()
    }

    pub fn put(&self, field: &str, series: Series) {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(field.to_string(), series);
    }
}
