//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Line colour per series, cycled when a chart holds more series than entries
    pub series_palette: &'static [Color32],
    pub capacity_line_color: Color32,
    pub health_line_color: Color32,
    /// Width of series lines (pixels)
    pub line_width: f32,
    /// Radius of per-cycle point markers (pixels)
    pub marker_radius: f32,
    /// Vertical gap between the two stacked charts
    pub chart_spacing: f32,
    /// Charts never shrink below this height
    pub min_chart_height: f32,
    /// Plots sharing this group id pan/zoom together along the cycle axis
    pub cycle_link_group: &'static str,

    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
    pub color_fade: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    series_palette: &[
        Color32::from_rgb(0, 191, 255),   // Deep sky blue
        Color32::from_rgb(255, 165, 0),   // Orange
        Color32::from_rgb(148, 0, 211),   // Violet
        Color32::from_rgb(38, 166, 154),  // Teal
        Color32::from_rgb(239, 83, 80),   // Soft red
    ],
    capacity_line_color: Color32::from_rgb(0, 191, 255),
    health_line_color: Color32::from_rgb(100, 255, 100),
    line_width: 2.0,
    marker_radius: 3.5,
    chart_spacing: 8.0,
    min_chart_height: 120.0,
    cycle_link_group: "cycle_axis_link",

    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
    color_fade: Color32::from_rgb(255, 80, 80),
};
