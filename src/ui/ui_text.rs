use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    // --- Toolbar ---
    pub tb_markers: String,
    pub tb_link_cycles: String,
    pub tb_legend: String,
    pub tb_summary: String,

    // --- Summary panel ---
    pub sp_heading: String,
    pub sp_no_data: String,
    pub label_points: String,
    pub label_min: String,
    pub label_max: String,
    pub label_mean: String,
    pub label_std_dev: String,
    pub label_first: String,
    pub label_last: String,
    pub label_fade: String,

    // --- Plot hover ---
    pub hover_cycle: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Battery Visualizer".to_string(),

    tb_markers: "Point markers".to_string(),
    tb_link_cycles: "Link cycle axes".to_string(),
    tb_legend: "Legend".to_string(),
    tb_summary: "Summary".to_string(),

    sp_heading: "Series Summary".to_string(),
    sp_no_data: "No data points".to_string(),
    label_points: "Points".to_string(),
    label_min: "Min".to_string(),
    label_max: "Max".to_string(),
    label_mean: "Mean".to_string(),
    label_std_dev: "Std. dev.".to_string(),
    label_first: "First".to_string(),
    label_last: "Last".to_string(),
    label_fade: "Fade".to_string(),

    hover_cycle: "Cycle".to_string(),
});
