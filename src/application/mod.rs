// Application layer - Fetch, store and render use cases
pub mod error;
pub mod fetcher;
pub mod mount;
pub mod renderer;
pub mod series_source;
pub mod series_store;
