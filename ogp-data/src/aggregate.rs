//! Chart aggregations over production records.
//!
//! Dates and regions are opaque labels: `"2024-01-01"` and `"2024-1-1"` are
//! different buckets, as are `"North"` and `"north"`.

use ogp_core::models::{ChartDatum, ProductionData};
use std::collections::{BTreeMap, HashMap};

/// Headroom applied above the tallest bar.
pub const Y_SCALE_HEADROOM: f64 = 1.1;

/// Number of intervals the y-axis is split into.
pub const Y_TICK_INTERVALS: f64 = 5.0;

/// Sum `oil_volume` per date, sorted ascending by date label.
pub fn by_date(records: &[ProductionData]) -> Vec<ChartDatum> {
    let mut buckets: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *buckets.entry(record.date.as_str()).or_insert(0.0) += record.oil_volume;
    }
    buckets
        .into_iter()
        .map(|(date, value)| ChartDatum {
            name: date.to_string(),
            value,
        })
        .collect()
}

/// Sum `oil_volume` per region, in order of first appearance.
pub fn by_region(records: &[ProductionData]) -> Vec<ChartDatum> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut result: Vec<ChartDatum> = Vec::new();
    for record in records {
        match index.get(record.region.as_str()) {
            Some(&i) => result[i].value += record.oil_volume,
            None => {
                index.insert(record.region.as_str(), result.len());
                result.push(ChartDatum {
                    name: record.region.clone(),
                    value: record.oil_volume,
                });
            }
        }
    }
    result
}

/// Y-axis extent and tick positions for the production bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    /// `ceil(max bucket * 1.1)`, or 0 for empty input.
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl AxisScale {
    pub fn for_data(data: &[ChartDatum]) -> Self {
        let tallest = data.iter().map(|d| d.value).fold(f64::NAN, f64::max);
        // NaN covers the empty case; negative totals still start the axis at 0
        let max = if tallest.is_nan() {
            0.0
        } else {
            (tallest * Y_SCALE_HEADROOM).ceil().max(0.0)
        };
        Self {
            max,
            ticks: ticks(max),
        }
    }
}

/// `0, step, 2*step, ...` up to and including `max`, where
/// `step = ceil(max / 5)`. A zero (or non-finite) max yields `[0]`.
pub fn ticks(max: f64) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 {
        return vec![0.0];
    }
    let step = (max / Y_TICK_INTERVALS).ceil();
    let mut result = Vec::new();
    let mut tick = 0.0;
    while tick <= max {
        result.push(tick);
        tick += step;
    }
    result
}
