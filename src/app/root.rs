use eframe::{
    Frame,
    egui::{
        CentralPanel, Context, ScrollArea, SidePanel, TextStyle, TopBottomPanel, Ui, Visuals,
    },
};

use crate::{
    Cli,
    analysis::SeriesSummary,
    app::ChartViewModel,
    config::{CHARTS, PLOT_CONFIG},
    models::ChartKind,
    ui::{PlotSurface, PlotVisibility, UI_CONFIG, UI_TEXT, UiStyleExt, get_fade_color},
};

pub struct App {
    view_model: ChartViewModel,
    pub(crate) plot_visibility: PlotVisibility,
    pub(crate) show_summary: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            view_model: ChartViewModel::new(),
            plot_visibility: PlotVisibility::default(),
            show_summary: true,
        }
    }
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        Self::with_view_model(ChartViewModel::new(), &args)
    }

    pub(crate) fn with_view_model(view_model: ChartViewModel, args: &Cli) -> Self {
        let mut app = Self {
            view_model,
            ..Self::default()
        };
        app.plot_visibility.markers = !args.no_markers;
        log::info!(
            "App ready: {} capacity series, {} SOH series",
            app.view_model.capacity_series().len(),
            app.view_model.health_series().len()
        );
        app
    }

    pub fn view_model(&self) -> &ChartViewModel {
        &self.view_model
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .min_height(28.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(&UI_TEXT.app_title);
                    ui.separator();
                    ui.checkbox(&mut self.plot_visibility.markers, &UI_TEXT.tb_markers);
                    ui.checkbox(
                        &mut self.plot_visibility.link_cycle_axes,
                        &UI_TEXT.tb_link_cycles,
                    );
                    ui.checkbox(&mut self.plot_visibility.legend, &UI_TEXT.tb_legend);
                    ui.separator();
                    ui.toggle_value(&mut self.show_summary, &UI_TEXT.tb_summary);
                });
            });
    }

    fn render_summary_panel(&self, ctx: &Context) {
        SidePanel::left("summary_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .resizable(false)
            .frame(UI_CONFIG.side_panel_frame())
            .show(ctx, |ui| {
                ui.heading(&UI_TEXT.sp_heading);
                ui.add_space(5.0);
                ScrollArea::vertical().id_salt("summary_scroll").show(ui, |ui| {
                    for (kind, chart) in self.view_model.charts() {
                        ui.label_subheader(CHARTS.labels(kind).title);
                        for series in chart.series {
                            ui.label(series.name());
                            match SeriesSummary::from_series(series) {
                                Some(summary) => summary_metrics(ui, kind, &summary),
                                None => ui.label_subdued(&UI_TEXT.sp_no_data),
                            }
                            ui.add_space(4.0);
                        }
                        ui.separator();
                    }
                });
            });
    }

    fn render_charts(&self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let charts = self.view_model.charts().count().max(1) as f32;
                // Title row plus spacing per chart
                let chrome =
                    charts * (ui.text_style_height(&TextStyle::Body) + PLOT_CONFIG.chart_spacing * 2.0);
                let height = (ui.available_height() - chrome) / charts;

                let mut surface = PlotSurface::new(ui, self.plot_visibility, height);
                self.view_model.present(&mut surface);
            });
    }
}

fn summary_metrics(ui: &mut Ui, kind: ChartKind, s: &SeriesSummary) {
    let precision = match kind {
        ChartKind::Capacity => 1,
        ChartKind::Health => 3,
    };
    let neutral = PLOT_CONFIG.color_text_neutral;
    let fmt = |v: f64| format!("{:.*}", precision, v);

    ui.metric(&UI_TEXT.label_points, &s.count.to_string(), neutral);
    ui.metric(&UI_TEXT.label_first, &fmt(s.first), neutral);
    ui.metric(&UI_TEXT.label_last, &fmt(s.last), neutral);
    ui.metric(&UI_TEXT.label_min, &fmt(s.min), neutral);
    ui.metric(&UI_TEXT.label_max, &fmt(s.max), neutral);
    ui.metric(&UI_TEXT.label_mean, &fmt(s.mean), neutral);
    ui.metric(&UI_TEXT.label_std_dev, &fmt(s.std_dev), neutral);
    ui.metric(
        &UI_TEXT.label_fade,
        &format!("{:.1}%", s.fade_pct),
        get_fade_color(s.fade_pct),
    );
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.render_top_panel(ctx);
        if self.show_summary {
            self.render_summary_panel(ctx);
        }
        self.render_charts(ctx);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_hides_markers() {
        let args = Cli {
            maximized: false,
            no_markers: true,
        };
        let app = App::with_view_model(ChartViewModel::new(), &args);
        assert!(!app.plot_visibility.markers);
        assert!(app.plot_visibility.link_cycle_axes);
        assert!(app.show_summary);
    }

    #[test]
    fn app_starts_from_the_sample() {
        let args = Cli {
            maximized: false,
            no_markers: false,
        };
        let app = App::with_view_model(ChartViewModel::new(), &args);
        assert!(app.plot_visibility.markers);
        assert_eq!(app.view_model(), &ChartViewModel::new());
    }
}
