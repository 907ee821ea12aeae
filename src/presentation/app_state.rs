// Application state for HTTP handlers
use crate::application::renderer::ChartRenderer;
use crate::infrastructure::canvas::CanvasSlot;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub renderer: ChartRenderer,
    pub canvas: Arc<CanvasSlot>,
    pub title: String,
}
