mod battery;
mod chart;

pub use {
    battery::BatteryRecord,
    chart::{AxisDescriptor, ChartKind, ChartSeries, ChartView},
};
