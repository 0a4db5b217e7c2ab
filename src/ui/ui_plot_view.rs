use eframe::egui::{Ui, Vec2b};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::config::{CHARTS, PLOT_CONFIG};

use crate::models::{ChartKind, ChartView};

use crate::ui::chart_surface::ChartSurface;
use crate::ui::styles::{colored_subsection_heading, series_color};
use crate::ui::ui_text::UI_TEXT;

/// Toggles that change how charts are drawn, never what is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotVisibility {
    pub markers: bool,
    pub link_cycle_axes: bool,
    pub legend: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            markers: true,
            link_cycle_axes: true,
            legend: false,
        }
    }
}

/// egui_plot backend for [`ChartSurface`]. Each rendered chart takes `chart_height` pixels.
pub struct PlotSurface<'u> {
    ui: &'u mut Ui,
    visibility: PlotVisibility,
    chart_height: f32,
}

impl<'u> PlotSurface<'u> {
    pub fn new(ui: &'u mut Ui, visibility: PlotVisibility, chart_height: f32) -> Self {
        Self {
            ui,
            visibility,
            chart_height: chart_height.max(PLOT_CONFIG.min_chart_height),
        }
    }
}

impl ChartSurface for PlotSurface<'_> {
    fn render_chart(&mut self, kind: ChartKind, chart: ChartView<'_>) {
        let labels = CHARTS.labels(kind);
        self.ui.label(colored_subsection_heading(labels.title));

        let x_name = chart.x_axis_name().unwrap_or_default().to_string();
        let y_name = chart.y_axis_name().unwrap_or_default().to_string();
        let hover_y_name = y_name.clone();

        let mut plot = Plot::new(kind.plot_id())
            .height(self.chart_height)
            .x_axis_label(x_name)
            .y_axis_label(y_name)
            .allow_scroll(false)
            .label_formatter(move |name, value| {
                let head = if name.is_empty() {
                    String::new()
                } else {
                    format!("{}\n", name)
                };
                format!(
                    "{}{} {:.0}\n{} {:.3}",
                    head, UI_TEXT.hover_cycle, value.x, hover_y_name, value.y
                )
            });

        if self.visibility.link_cycle_axes {
            plot = plot.link_axis(PLOT_CONFIG.cycle_link_group, Vec2b::new(true, false));
        }
        if self.visibility.legend {
            plot = plot.legend(Legend::default());
        }

        let count = chart.series.len();
        let markers = self.visibility.markers;
        plot.show(self.ui, |plot_ui| {
            for (idx, series) in chart.series.iter().enumerate() {
                let color = series_color(kind, idx, count);
                let points = series.points();

                plot_ui.line(
                    Line::new(series.name(), PlotPoints::new(points.clone()))
                        .color(color)
                        .width(PLOT_CONFIG.line_width),
                );

                if markers {
                    plot_ui.points(
                        Points::new(series.name(), PlotPoints::new(points))
                            .color(color)
                            .radius(PLOT_CONFIG.marker_radius),
                    );
                }
            }
        });

        self.ui.add_space(PLOT_CONFIG.chart_spacing);
    }
}
