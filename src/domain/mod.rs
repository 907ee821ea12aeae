// Domain layer - Series and chart models
pub mod chart;
pub mod series;
