use {
    crate::{
        config::{CHARTS, SAMPLE},
        models::{AxisDescriptor, BatteryRecord, ChartKind, ChartSeries, ChartView},
        ui::ChartSurface,
    },
    itertools::Itertools,
    serde::Serialize,
    strum::IntoEnumIterator,
};

/// Chart data for the two battery charts, built once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartViewModel {
    capacity_series: Vec<ChartSeries>,
    health_series: Vec<ChartSeries>,
    capacity_x_axes: Vec<AxisDescriptor>,
    capacity_y_axes: Vec<AxisDescriptor>,
    health_x_axes: Vec<AxisDescriptor>,
    health_y_axes: Vec<AxisDescriptor>,
}

impl Default for ChartViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartViewModel {
    /// The built-in seven-cycle sample.
    pub fn new() -> Self {
        let vm = Self::with_series(
            vec![ChartSeries::new(SAMPLE.series_name, SAMPLE.capacity_ah)],
            vec![ChartSeries::new(SAMPLE.series_name, SAMPLE.state_of_health)],
        );
        log::debug!(
            "Sample view-model built: {} capacity points, {} SOH points",
            SAMPLE.capacity_ah.len(),
            SAMPLE.state_of_health.len()
        );
        vm
    }

    /// One capacity and one SOH series per group, groups kept in first-appearance order
    /// and each group's points ordered by cycle.
    pub fn from_records(records: &[BatteryRecord]) -> Self {
        let mut capacity_series = Vec::new();
        let mut health_series = Vec::new();

        for group in records.iter().map(|r| r.group.as_str()).unique() {
            let rows: Vec<&BatteryRecord> = records
                .iter()
                .filter(|r| r.group == group)
                .sorted_by_key(|r| r.cycle)
                .collect();

            let cycles: Vec<i32> = rows.iter().map(|r| r.cycle).collect();
            capacity_series.push(ChartSeries::with_cycles(
                group,
                cycles.clone(),
                rows.iter().map(|r| r.capacity).collect(),
            ));
            health_series.push(ChartSeries::with_cycles(
                group,
                cycles,
                rows.iter().map(|r| r.state_of_health).collect(),
            ));
        }

        log::debug!(
            "View-model built from {} records in {} groups",
            records.len(),
            capacity_series.len()
        );
        Self::with_series(capacity_series, health_series)
    }

    fn with_series(capacity_series: Vec<ChartSeries>, health_series: Vec<ChartSeries>) -> Self {
        Self {
            capacity_series,
            health_series,
            capacity_x_axes: vec![AxisDescriptor::new(CHARTS.capacity.x_axis)],
            capacity_y_axes: vec![AxisDescriptor::new(CHARTS.capacity.y_axis)],
            health_x_axes: vec![AxisDescriptor::new(CHARTS.health.x_axis)],
            health_y_axes: vec![AxisDescriptor::new(CHARTS.health.y_axis)],
        }
    }

    pub fn capacity_series(&self) -> &[ChartSeries] {
        &self.capacity_series
    }

    pub fn health_series(&self) -> &[ChartSeries] {
        &self.health_series
    }

    pub fn capacity_x_axes(&self) -> &[AxisDescriptor] {
        &self.capacity_x_axes
    }

    pub fn capacity_y_axes(&self) -> &[AxisDescriptor] {
        &self.capacity_y_axes
    }

    pub fn health_x_axes(&self) -> &[AxisDescriptor] {
        &self.health_x_axes
    }

    pub fn health_y_axes(&self) -> &[AxisDescriptor] {
        &self.health_y_axes
    }

    pub fn chart(&self, kind: ChartKind) -> ChartView<'_> {
        match kind {
            ChartKind::Capacity => ChartView {
                series: &self.capacity_series,
                x_axes: &self.capacity_x_axes,
                y_axes: &self.capacity_y_axes,
            },
            ChartKind::Health => ChartView {
                series: &self.health_series,
                x_axes: &self.health_x_axes,
                y_axes: &self.health_y_axes,
            },
        }
    }

    pub fn charts(&self) -> impl Iterator<Item = (ChartKind, ChartView<'_>)> + '_ {
        ChartKind::iter().map(move |kind| (kind, self.chart(kind)))
    }

    /// Hands every chart to `surface`, capacity first.
    pub fn present<S: ChartSurface + ?Sized>(&self, surface: &mut S) {
        for (kind, chart) in self.charts() {
            surface.render_chart(kind, chart);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(axes: &[AxisDescriptor]) -> Vec<&str> {
        axes.iter().map(AxisDescriptor::name).collect()
    }

    #[test]
    fn capacity_series_holds_the_sample() {
        let vm = ChartViewModel::new();
        assert_eq!(vm.capacity_series().len(), 1);
        let s = &vm.capacity_series()[0];
        assert_eq!(s.len(), 7);
        assert_eq!(s.values(), &[100.0, 96.0, 93.0, 90.0, 86.0, 83.0, 80.0]);
    }

    #[test]
    fn health_series_holds_the_sample() {
        let vm = ChartViewModel::new();
        assert_eq!(vm.health_series().len(), 1);
        let s = &vm.health_series()[0];
        assert_eq!(s.len(), 7);
        assert_eq!(s.values(), &[1.00, 0.97, 0.95, 0.92, 0.89, 0.86, 0.83]);
    }

    #[test]
    fn every_axis_collection_has_one_entry() {
        let vm = ChartViewModel::new();
        assert_eq!(vm.capacity_x_axes().len(), 1);
        assert_eq!(vm.capacity_y_axes().len(), 1);
        assert_eq!(vm.health_x_axes().len(), 1);
        assert_eq!(vm.health_y_axes().len(), 1);
    }

    #[test]
    fn axis_names() {
        let vm = ChartViewModel::new();
        assert_eq!(names(vm.capacity_x_axes()), vec!["Cycle"]);
        assert_eq!(names(vm.capacity_y_axes()), vec!["Capacity (Ah)"]);
        assert_eq!(names(vm.health_x_axes()), vec!["Cycle"]);
        assert_eq!(names(vm.health_y_axes()), vec!["SOH"]);
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(ChartViewModel::new(), ChartViewModel::new());
        assert_eq!(ChartViewModel::default(), ChartViewModel::new());
    }

    #[test]
    fn chart_view_matches_accessors() {
        let vm = ChartViewModel::new();
        let health = vm.chart(ChartKind::Health);
        assert_eq!(health.series, vm.health_series());
        assert_eq!(health.y_axis_name(), Some("SOH"));

        let kinds: Vec<_> = vm.charts().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![ChartKind::Capacity, ChartKind::Health]);
    }

    #[derive(Default)]
    struct RecordingSurface {
        drawn: Vec<(ChartKind, Vec<Vec<f64>>, Option<String>, Option<String>)>,
    }

    impl ChartSurface for RecordingSurface {
        fn render_chart(&mut self, kind: ChartKind, chart: ChartView<'_>) {
            self.drawn.push((
                kind,
                chart.series.iter().map(|s| s.values().to_vec()).collect(),
                chart.x_axis_name().map(str::to_string),
                chart.y_axis_name().map(str::to_string),
            ));
        }
    }

    #[test]
    fn present_pushes_both_charts_in_order() {
        let vm = ChartViewModel::new();
        let mut surface = RecordingSurface::default();
        vm.present(&mut surface);

        assert_eq!(surface.drawn.len(), 2);
        let (kind, series, x, y) = &surface.drawn[0];
        assert_eq!(*kind, ChartKind::Capacity);
        assert_eq!(series[0], SAMPLE.capacity_ah.to_vec());
        assert_eq!(x.as_deref(), Some("Cycle"));
        assert_eq!(y.as_deref(), Some("Capacity (Ah)"));

        let (kind, series, _, y) = &surface.drawn[1];
        assert_eq!(*kind, ChartKind::Health);
        assert_eq!(series[0], SAMPLE.state_of_health.to_vec());
        assert_eq!(y.as_deref(), Some("SOH"));
    }

    #[test]
    fn present_works_through_a_trait_object() {
        let vm = ChartViewModel::new();
        let mut recorder = RecordingSurface::default();
        let surface: &mut dyn ChartSurface = &mut recorder;
        vm.present(surface);
        assert_eq!(recorder.drawn.len(), 2);
    }

    #[test]
    fn records_group_by_label_and_sort_by_cycle() {
        let records = vec![
            BatteryRecord::new(2, 95.0, 0.95, 300.0, "B"),
            BatteryRecord::new(1, 97.0, 0.97, 310.0, "A"),
            BatteryRecord::new(0, 100.0, 1.00, 320.0, "B"),
            BatteryRecord::new(0, 99.0, 0.99, 330.0, "A"),
            BatteryRecord::new(1, 98.0, 0.98, 305.0, "B"),
        ];
        let vm = ChartViewModel::from_records(&records);

        let cap_names: Vec<_> = vm.capacity_series().iter().map(ChartSeries::name).collect();
        assert_eq!(cap_names, vec!["B", "A"]);

        let b = &vm.capacity_series()[0];
        assert_eq!(b.cycles(), Some(&[0, 1, 2][..]));
        assert_eq!(b.values(), &[100.0, 98.0, 95.0]);

        let a_soh = &vm.health_series()[1];
        assert_eq!(a_soh.name(), "A");
        assert_eq!(a_soh.points(), vec![[0.0, 0.99], [1.0, 0.97]]);

        assert_eq!(names(vm.capacity_y_axes()), vec!["Capacity (Ah)"]);
        assert_eq!(names(vm.health_y_axes()), vec!["SOH"]);
    }

    #[test]
    fn no_records_means_no_series() {
        let vm = ChartViewModel::from_records(&[]);
        assert!(vm.capacity_series().is_empty());
        assert!(vm.health_series().is_empty());
        assert_eq!(vm.capacity_x_axes().len(), 1);
    }
}
