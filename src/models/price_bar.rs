use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// One trading day of OHLCV data. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        PriceBar { date, open, high, low, close, volume }
    }

    /// Check the OHLC invariants: positive prices, low <= open,close <= high
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.open <= 0.0 || self.high <= 0.0 || self.low <= 0.0 || self.close <= 0.0 {
            return Err(ChartError::InvalidSeries(format!(
                "non-positive price on {}", self.date
            )));
        }
        if self.low > self.high {
            return Err(ChartError::InvalidSeries(format!(
                "low {} above high {} on {}", self.low, self.high, self.date
            )));
        }
        if self.open < self.low || self.open > self.high
            || self.close < self.low || self.close > self.high
        {
            return Err(ChartError::InvalidSeries(format!(
                "open/close outside low-high range on {}", self.date
            )));
        }
        Ok(())
    }
}

/// Daily price series, strictly ascending by date. Non-trading days are
/// simply absent; no gap filling is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from raw bars, failing fast on an empty input,
    /// an out-of-order date or a bar violating the OHLC invariants.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, ChartError> {
        if bars.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        for bar in &bars {
            bar.validate()?;
        }
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ChartError::InvalidSeries(format!(
                    "dates not strictly ascending: {} then {}", pair[0].date, pair[1].date
                )));
            }
        }
        Ok(PriceSeries { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }
}
