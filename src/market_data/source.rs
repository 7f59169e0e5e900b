/**
* filename : source
* author : HAMA
* date: 2025. 6. 7.
* description:
**/

use std::path::PathBuf;

use chrono::{Duration, NaiveDate, Weekday, Datelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::error::ChartError;
use crate::models::price_bar::{PriceBar, PriceSeries};

/// 가격 데이터 공급 계약 (외부 수집 작업과의 경계)
///
/// 날짜 오름차순, OHLC 불변식을 만족하는 일봉 시계열을 돌려준다.
/// 빈 시계열은 오류다.
pub trait PriceSource {
  fn fetch(&self, symbol: &str, lookback_days: u32) -> Result<PriceSeries, ChartError>;
}

#[derive(Debug, Deserialize)]
struct CsvRow {
  date: NaiveDate,
  open: f64,
  high: f64,
  low: f64,
  close: f64,
  volume: u64,
}

/// 수집 작업이 내려받아 둔 OHLCV CSV 파일을 읽는 공급자
/// 헤더: date,open,high,low,close,volume
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
  path: PathBuf,
}

impl CsvPriceSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    CsvPriceSource { path: path.into() }
  }
}

impl PriceSource for CsvPriceSource {
  fn fetch(&self, symbol: &str, lookback_days: u32) -> Result<PriceSeries, ChartError> {
    let mut reader = csv::Reader::from_path(&self.path)?;
    let mut bars = Vec::new();

    for row in reader.deserialize::<CsvRow>() {
      let row = row?;
      bars.push(PriceBar::new(row.date, row.open, row.high, row.low, row.close, row.volume));
    }

    // 최근 lookback 구간만 유지
    if bars.len() > lookback_days as usize {
      bars.drain(..bars.len() - lookback_days as usize);
    }

    log::info!("CSV 시계열 로드: {} - {} 봉 ({})", symbol, bars.len(), self.path.display());

    PriceSeries::new(bars)
  }
}

/// 시드 고정 랜덤워크 공급자 (테스트/데모용)
#[derive(Debug, Clone)]
pub struct MockPriceSource {
  seed: u64,
  start_price: f64,
}

impl MockPriceSource {
  pub fn new(seed: u64, start_price: f64) -> Self {
    MockPriceSource { seed, start_price }
  }
}

impl PriceSource for MockPriceSource {
  fn fetch(&self, _symbol: &str, lookback_days: u32) -> Result<PriceSeries, ChartError> {
    if lookback_days == 0 {
      return Err(ChartError::EmptySeries);
    }

    let mut rng = StdRng::seed_from_u64(self.seed);
    let mut bars = Vec::with_capacity(lookback_days as usize);
    let mut date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    let mut close = self.start_price;

    while bars.len() < lookback_days as usize {
      // 주말 건너뛰기 (비거래일은 단순히 없는 날)
      if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date += Duration::days(1);
        continue;
      }

      let open = close;
      let drift: f64 = rng.gen_range(-0.02..0.025);
      close = (open * (1.0 + drift)).max(1.0);
      let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
      let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
      let volume = rng.gen_range(500_000..5_000_000);

      bars.push(PriceBar::new(date, open, high, low, close, volume));
      date += Duration::days(1);
    }

    PriceSeries::new(bars)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_source_is_deterministic() {
    let source = MockPriceSource::new(7, 100.0);
    let a = source.fetch("TEST", 70).unwrap();
    let b = source.fetch("TEST", 70).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.len(), 70);
  }

  #[test]
  fn test_mock_source_satisfies_invariants() {
    let source = MockPriceSource::new(42, 50.0);
    let series = source.fetch("TEST", 120).unwrap();

    // PriceSeries::new 가 이미 검증했지만, 명시적으로 한 번 더
    for bar in series.bars() {
      assert!(bar.validate().is_ok());
    }
    assert!(series.dates().windows(2).all(|d| d[0] < d[1]));
  }

  #[test]
  fn test_mock_source_zero_lookback_rejected() {
    let source = MockPriceSource::new(1, 100.0);
    assert!(source.fetch("TEST", 0).is_err());
  }
}
