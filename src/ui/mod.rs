mod chart_surface;
mod styles;
mod ui_config;
mod ui_plot_view;
mod ui_text;

pub use chart_surface::ChartSurface;

pub(crate) use styles::{UiStyleExt, get_fade_color};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub use ui_plot_view::{PlotSurface, PlotVisibility};
