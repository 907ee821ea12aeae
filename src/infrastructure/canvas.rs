// In-process canvas slot backing the page's chart element
use crate::application::error::MountError;
use crate::application::mount::ChartMount;
use crate::domain::chart::ChartConfig;
use std::sync::RwLock;

#[derive(Debug)]
struct SlotState {
    attached: bool,
    chart: Option<ChartConfig>,
}

/// Holds the chart currently drawn on one page element.
/// Every draw replaces the previous chart.
#[derive(Debug)]
pub struct CanvasSlot {
    id: String,
    state: RwLock<SlotState>,
}

impl CanvasSlot {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: RwLock::new(SlotState {
                attached: true,
                chart: None,
            }),
        }
    }

    pub fn current(&self) -> Option<ChartConfig> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .chart
            .clone()
    }

    /// Remove the element from the page; later draws fail
    pub fn detach(&self) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.attached = false;
        state.chart = None;
    }

    /// Put the element back, empty
    pub fn attach(&self) {
        self.state.write().unwrap_or_else(|e| e.into_inner()).attached = true;
    }
}

impl ChartMount for CanvasSlot {
    fn id(&self) -> &str {
        &self.id
    }

    fn draw(&self, config: ChartConfig) -> Result<(), MountError> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if !state.attached {
            return Err(MountError::Missing {
                id: self.id.clone(),
            });
        }
        tracing::debug!(
            "Drawing {} chart on #{}",
            config.label().unwrap_or("static"),
            self.id
        );
        state.chart = Some(config);
        Ok(())
    }
}
