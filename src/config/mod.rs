//! Configuration module for the battery visualizer.

mod charts;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use charts::{CHARTS, ChartLabels, ChartsConfig, SAMPLE, SampleData};
pub use plot::PLOT_CONFIG;
