//! Chart labelling and the built-in sample data

use crate::models::ChartKind;

pub struct ChartLabels {
    pub title: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
}

pub struct ChartsConfig {
    pub capacity: ChartLabels,
    pub health: ChartLabels,
}

impl ChartsConfig {
    pub fn labels(&self, kind: ChartKind) -> &ChartLabels {
        match kind {
            ChartKind::Capacity => &self.capacity,
            ChartKind::Health => &self.health,
        }
    }
}

pub const CHARTS: ChartsConfig = ChartsConfig {
    capacity: ChartLabels {
        title: "Capacity",
        x_axis: "Cycle",
        y_axis: "Capacity (Ah)",
    },
    health: ChartLabels {
        title: "State of Health",
        x_axis: "Cycle",
        y_axis: "SOH",
    },
};

pub struct SampleData {
    /// Name given to each sample series
    pub series_name: &'static str,
    /// Capacity in Ah, one value per cycle starting at cycle 0
    pub capacity_ah: [f64; 7],
    /// Unitless SOH ratio, one value per cycle starting at cycle 0
    pub state_of_health: [f64; 7],
}

pub const SAMPLE: SampleData = SampleData {
    series_name: "Sample",
    capacity_ah: [100.0, 96.0, 93.0, 90.0, 86.0, 83.0, 80.0],
    state_of_health: [1.00, 0.97, 0.95, 0.92, 0.89, 0.86, 0.83],
};
