// Chart renderer - Use case for fetching a field and drawing it
use crate::application::error::DashboardError;
use crate::application::fetcher::SeriesFetcher;
use crate::application::mount::ChartMount;
use crate::domain::chart::ChartConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Callback for render failures. Without one, failures only reach the log.
pub type ErrorHandler = Arc<dyn Fn(&str, &DashboardError) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    Idle,
    Fetching,
    Rendered,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldStatus {
    pub state: FieldState,
    pub since: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
struct FieldEntry {
    status: FieldStatus,
    in_flight: usize,
}

#[derive(Clone)]
pub struct ChartRenderer {
    fetcher: SeriesFetcher,
    mount: Arc<dyn ChartMount>,
    on_error: Option<ErrorHandler>,
    fields: Arc<RwLock<HashMap<String, FieldEntry>>>,
}

impl ChartRenderer {
    pub fn new(fetcher: SeriesFetcher, mount: Arc<dyn ChartMount>) -> Self {
        Self {
            fetcher,
            mount,
            on_error: None,
            fields: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_error_handler(mut self, handler: ErrorHandler) -> Self {
        self.on_error = Some(handler);
        self
    }

    /// Fetch `field` and, once that succeeds, draw it as a time-axis line chart.
    /// Nothing is drawn when the fetch fails.
    ///
    /// Overlapping calls for one field keep it `Fetching` until the last one
    /// settles; that last outcome becomes the field's state.
    pub async fn render_chart(&self, field: &str) -> Result<(), DashboardError> {
        self.begin(field);

        let result = self.fetch_and_draw(field).await;
        match &result {
            Ok(()) => {
                tracing::info!("Rendered {} on #{}", field, self.mount.id());
                self.finish(field, FieldState::Rendered, None);
            }
            Err(e) => {
                tracing::debug!("Rendering {} failed: {}", field, e);
                self.finish(field, FieldState::Failed, Some(e.to_string()));
                if let Some(handler) = &self.on_error {
                    handler(field, e);
                }
            }
        }
        result
    }

    async fn fetch_and_draw(&self, field: &str) -> Result<(), DashboardError> {
        self.fetcher.fetch_series(field).await?;
        let series = self
            .fetcher
            .series(field)
            .ok_or_else(|| DashboardError::NotFetched(field.to_string()))?;
        self.mount.draw(ChartConfig::time_series(field, series))?;
        Ok(())
    }

    /// Draw the static weekly demonstration chart on the same mount
    pub fn render_demo_chart(&self) -> Result<(), DashboardError> {
        self.mount.draw(ChartConfig::weekly_demo()).map_err(|e| {
            let err = DashboardError::from(e);
            tracing::debug!("Rendering demo chart failed: {}", err);
            if let Some(handler) = &self.on_error {
                handler("demo", &err);
            }
            err
        })
    }

    pub fn field_status(&self, field: &str) -> FieldState {
        self.fields
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(field)
            .map(|entry| entry.status.state)
            .unwrap_or(FieldState::Idle)
    }

    pub fn statuses(&self) -> HashMap<String, FieldStatus> {
        self.fields
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(field, entry)| (field.clone(), entry.status.clone()))
            .collect()
    }

    fn begin(&self, field: &str) {
        let mut fields = self.fields.write().unwrap_or_else(|e| e.into_inner());
        let entry = fields.entry(field.to_string()).or_insert_with(|| FieldEntry {
            status: FieldStatus::new(FieldState::Idle, None),
            in_flight: 0,
        });
        entry.in_flight += 1;
        if entry.status.state != FieldState::Fetching {
            entry.status = FieldStatus::new(FieldState::Fetching, None);
        }
    }

    fn finish(&self, field: &str, state: FieldState, error: Option<String>) {
        let mut fields = self.fields.write().unwrap_or_else(|e| e.into_inner());
        if let Some(entry) = fields.get_mut(field) {
            entry.in_flight = entry.in_flight.saturating_sub(1);
            if entry.in_flight == 0 {
                entry.status = FieldStatus::new(state, error);
            }
        }
    }
}

impl FieldStatus {
    fn new(state: FieldState, error: Option<String>) -> Self {
        Self {
            state,
            since: Utc::now(),
            error,
        }
    }
}
