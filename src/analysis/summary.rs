use {
    crate::{
        models::ChartSeries,
        utils::{fade_pct, get_max, get_min},
    },
    serde::Serialize,
    statrs::statistics::Statistics,
};

/// Descriptive statistics over one series. Population std-dev, not sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub first: f64,
    pub last: f64,
    /// Drop from first to last value, as a percentage of the first
    pub fade_pct: f64,
}

impl SeriesSummary {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (&first, &last) = (values.first()?, values.last()?);
        let min = get_min(values)?;
        let max = get_max(values)?;

        Some(Self {
            count: values.len(),
            min,
            max,
            mean: values.iter().mean(),
            std_dev: values.iter().population_std_dev(),
            first,
            last,
            fade_pct: fade_pct(first, last),
        })
    }

    pub fn from_series(series: &ChartSeries) -> Option<Self> {
        Self::from_values(series.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SAMPLE;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert!(SeriesSummary::from_values(&[]).is_none());
        assert!(SeriesSummary::from_series(&ChartSeries::new("x", Vec::new())).is_none());
    }

    #[test]
    fn capacity_sample_summary() {
        let s = SeriesSummary::from_values(&SAMPLE.capacity_ah).unwrap();
        assert_eq!(s.count, 7);
        assert_eq!(s.min, 80.0);
        assert_eq!(s.max, 100.0);
        assert_eq!(s.first, 100.0);
        assert_eq!(s.last, 80.0);
        assert!(approx(s.mean, 89.714_285_714_285_71));
        assert!(approx(s.std_dev, 6.648_615_016_125_77));
        assert!(approx(s.fade_pct, 20.0));
    }

    #[test]
    fn std_dev_is_population() {
        let s = SeriesSummary::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!(approx(s.mean, 5.0));
        assert!(approx(s.std_dev, 2.0));
    }

    #[test]
    fn single_value_has_zero_spread() {
        let s = SeriesSummary::from_values(&[0.91]).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.min, s.max);
        assert!(approx(s.std_dev, 0.0));
        assert!(approx(s.fade_pct, 0.0));
    }
}
