// Presentation layer - Page host
pub mod app_state;
pub mod handlers;
pub mod page;
