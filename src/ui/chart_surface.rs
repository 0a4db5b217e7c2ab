use crate::models::{ChartKind, ChartView};

/// Anything that can draw a chart from plain series and axis data.
/// The view-model only talks to this trait; concrete plotting backends adapt at the boundary.
pub trait ChartSurface {
    fn render_chart(&mut self, kind: ChartKind, chart: ChartView<'_>);
}
