use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::indicators::frame::IndicatorFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotKind {
    Peak,
    Trough,
}

/// A local price extremum found by the symmetric-window scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    pub index: usize,
    pub date: NaiveDate,
    pub price: f64,
    pub kind: PivotKind,
}

/// One wave tag assigned to a pivot. Tags come from a fixed ordered set
/// (e.g. 1..5, A, B, C) and are assigned in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveLabel {
    pub label: String,
    pub pivot: Pivot,
}

/// Projection segment from the pivot labeled "B" to a Fibonacci-extension
/// target. A flat visual cue for the chart, not a trading signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSegment {
    pub start_date: NaiveDate,
    pub start_price: f64,
    pub target_date: NaiveDate,
    pub target_price: f64,
}

/// The full structured result handed to the rendering collaborator:
/// indicator columns, the filtered pivot set, wave labels and the optional
/// projection segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub symbol: String,
    pub frame: IndicatorFrame,
    pub pivots: Vec<Pivot>,
    pub labels: Vec<WaveLabel>,
    pub forecast: Option<ForecastSegment>,
}
