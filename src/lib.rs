// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod models;
pub mod ui;
mod utils;

// Re-export commonly used types outside of crate (for dump_charts.rs)
pub use analysis::SeriesSummary;
pub use app::{App, ChartViewModel};
pub use models::{AxisDescriptor, BatteryRecord, ChartKind, ChartSeries, ChartView};
pub use ui::ChartSurface;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start with the window maximized
    #[arg(long, default_value_t = false)]
    pub maximized: bool,

    /// Start with per-cycle point markers hidden
    #[arg(long, default_value_t = false)]
    pub no_markers: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
