use {
    crate::{
        config::PLOT_CONFIG,
        models::ChartKind,
        ui::UI_CONFIG,
    },
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait ChartColor {
    fn color(&self) -> Color32;
}

impl ChartColor for ChartKind {
    fn color(&self) -> Color32 {
        match self {
            Self::Capacity => PLOT_CONFIG.capacity_line_color,
            Self::Health => PLOT_CONFIG.health_line_color,
        }
    }
}

/// Colour for series `idx` of a chart holding `count` series.
/// A lone series takes the chart's own colour, several cycle through the palette.
pub fn series_color(kind: ChartKind, idx: usize, count: usize) -> Color32 {
    let palette = PLOT_CONFIG.series_palette;
    if count <= 1 || palette.is_empty() {
        kind.color()
    } else {
        palette[idx % palette.len()]
    }
}

pub fn get_fade_color(fade_pct: f64) -> Color32 {
    if fade_pct > 0.0 {
        PLOT_CONFIG.color_fade
    } else {
        PLOT_CONFIG.color_text_neutral
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }
}
