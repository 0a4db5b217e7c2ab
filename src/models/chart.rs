use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// A named, ordered run of values drawn as one line.
/// Without explicit cycles the value index is the cycle number.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cycles: Option<Vec<i32>>,
    values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            cycles: None,
            values: values.into(),
        }
    }

    /// `cycles` and `values` are paired by position; extra entries on the longer side are dropped.
    pub fn with_cycles(name: impl Into<String>, mut cycles: Vec<i32>, mut values: Vec<f64>) -> Self {
        let n = cycles.len().min(values.len());
        cycles.truncate(n);
        values.truncate(n);
        Self {
            name: name.into(),
            cycles: Some(cycles),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn cycles(&self) -> Option<&[i32]> {
        self.cycles.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (x, y) pairs ready for a plotting backend.
    pub fn points(&self) -> Vec<[f64; 2]> {
        match &self.cycles {
            Some(cycles) => cycles
                .iter()
                .zip(&self.values)
                .map(|(&c, &v)| [c as f64, v])
                .collect(),
            None => self
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| [i as f64, v])
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AxisDescriptor {
    name: String,
}

impl AxisDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    Ord,
    PartialOrd,
)]
pub enum ChartKind {
    #[strum(to_string = "Capacity")]
    Capacity,

    #[strum(to_string = "State of Health")]
    Health,
}

impl ChartKind {
    /// Stable egui id for the plot widget of this chart.
    pub fn plot_id(&self) -> &'static str {
        match self {
            ChartKind::Capacity => "capacity_plot",
            ChartKind::Health => "health_plot",
        }
    }
}

/// Everything a surface needs to draw one chart, borrowed from the view-model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartView<'a> {
    pub series: &'a [ChartSeries],
    pub x_axes: &'a [AxisDescriptor],
    pub y_axes: &'a [AxisDescriptor],
}

impl<'a> ChartView<'a> {
    pub fn x_axis_name(&self) -> Option<&'a str> {
        self.x_axes.first().map(AxisDescriptor::name)
    }

    pub fn y_axis_name(&self) -> Option<&'a str> {
        self.y_axes.first().map(AxisDescriptor::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn implicit_cycles_use_value_index() {
        let s = ChartSeries::new("cap", vec![5.0, 4.0, 3.5]);
        assert_eq!(s.points(), vec![[0.0, 5.0], [1.0, 4.0], [2.0, 3.5]]);
        assert!(s.cycles().is_none());
    }

    #[test]
    fn explicit_cycles_are_paired_and_truncated() {
        let s = ChartSeries::with_cycles("B1", vec![10, 20, 30], vec![0.9, 0.8]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.cycles(), Some(&[10, 20][..]));
        assert_eq!(s.points(), vec![[10.0, 0.9], [20.0, 0.8]]);
    }

    #[test]
    fn chart_kinds_iterate_capacity_first() {
        let kinds: Vec<_> = ChartKind::iter().collect();
        assert_eq!(kinds, vec![ChartKind::Capacity, ChartKind::Health]);
        assert_eq!(ChartKind::Health.to_string(), "State of Health");
        assert_ne!(ChartKind::Capacity.plot_id(), ChartKind::Health.plot_id());
    }

    #[test]
    fn chart_view_reads_first_axis_names() {
        let x = [AxisDescriptor::new("Cycle")];
        let y: [AxisDescriptor; 0] = [];
        let view = ChartView {
            series: &[],
            x_axes: &x,
            y_axes: &y,
        };
        assert_eq!(view.x_axis_name(), Some("Cycle"));
        assert_eq!(view.y_axis_name(), None);
    }
}
