//! 지표 계산 테스트
//!
//! 이동평균 / 볼린저밴드 / KD 스토캐스틱의 계약 검증

use rstest::rstest;
use xWave::config::Config;
use xWave::indicators::frame::IndicatorFrame;
use xWave::market_data::source::{MockPriceSource, PriceSource};
use xWave::models::price_bar::{PriceBar, PriceSeries};
use chrono::NaiveDate;

fn series_from_closes(closes: &[f64]) -> PriceSeries {
  let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
  let bars = closes.iter().enumerate()
    .map(|(i, &c)| PriceBar::new(
      start + chrono::Duration::days(i as i64),
      c, c + 1.0, c - 1.0, c, 10_000,
    ))
    .collect();
  PriceSeries::new(bars).unwrap()
}

fn mock_series(seed: u64, bars: u32) -> PriceSeries {
  MockPriceSource::new(seed, 100.0).fetch("TEST", bars).unwrap()
}

#[rstest]
#[case(5)]
#[case(14)]
#[case(20)]
fn test_ma_defined_iff_window_full(#[case] period: usize) {
  let series = mock_series(11, 70);
  let config = Config::default();
  let frame = IndicatorFrame::compute(&series, &config.indicators);
  let closes = series.closes();
  let ma = &frame.ma[&period];

  for i in 0..series.len() {
    if i + 1 < period {
      assert_eq!(ma[i], None, "MA_{} should be undefined at {}", period, i);
    } else {
      let window = &closes[i + 1 - period..=i];
      let mean = window.iter().sum::<f64>() / period as f64;
      let value = ma[i].expect("MA should be defined once the window is full");
      assert!((value - mean).abs() < 1e-9, "MA_{} mismatch at {}", period, i);
    }
  }
}

#[test]
fn test_bollinger_symmetry() {
  let series = mock_series(23, 90);
  let config = Config::default();
  let frame = IndicatorFrame::compute(&series, &config.indicators);

  for i in 0..series.len() {
    if let (Some(mid), Some(upper), Some(lower)) = (
      frame.bollinger.mid[i],
      frame.bollinger.upper[i],
      frame.bollinger.lower[i],
    ) {
      assert!(((upper - mid) - (mid - lower)).abs() < 1e-9);
    }
  }
}

#[test]
fn test_bollinger_mid_equals_ma20() {
  let series = mock_series(31, 70);
  let config = Config::default();
  let frame = IndicatorFrame::compute(&series, &config.indicators);

  for i in 0..series.len() {
    assert_eq!(frame.bollinger.mid[i].is_some(), frame.ma[&20][i].is_some());
    if let (Some(mid), Some(ma)) = (frame.bollinger.mid[i], frame.ma[&20][i]) {
      assert!((mid - ma).abs() < 1e-9);
    }
  }
}

#[test]
fn test_stochastic_bounds() {
  let series = mock_series(47, 120);
  let config = Config::default();
  let frame = IndicatorFrame::compute(&series, &config.indicators);

  for i in 0..series.len() {
    for value in [frame.stochastic.rsv[i], frame.stochastic.k[i], frame.stochastic.d[i]] {
      if let Some(v) = value {
        assert!((0.0..=100.0).contains(&v), "stochastic out of range at {}: {}", i, v);
      }
    }
  }
}

#[test]
fn test_rsv_is_100_on_new_high() {
  // 9일 내내 상승하여 신고가로 마감하면 RSV = 100
  let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64 * 2.0).collect();
  let series = series_from_closes(&closes);
  let config = Config::default();
  let frame = IndicatorFrame::compute(&series, &config.indicators);

  // 종가 = 고가인 시계열로 다시 확인 (high = close + 1.0 이므로 보정)
  let last = frame.stochastic.rsv[14].unwrap();
  assert!(last > 90.0);

  let bars: Vec<PriceBar> = closes.iter().enumerate()
    .map(|(i, &c)| PriceBar::new(
      NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(i as i64),
      c - 1.0, c, c - 2.0, c, 10_000,
    ))
    .collect();
  let series = PriceSeries::new(bars).unwrap();
  let frame = IndicatorFrame::compute(&series, &config.indicators);

  assert!((frame.stochastic.rsv[14].unwrap() - 100.0).abs() < 1e-9);
}

#[test]
fn test_frame_length_matches_series() {
  let series = mock_series(5, 45);
  let config = Config::default();
  let frame = IndicatorFrame::compute(&series, &config.indicators);

  assert_eq!(frame.len(), series.len());
  for column in frame.ma.values() {
    assert_eq!(column.len(), series.len());
  }
  assert_eq!(frame.stochastic.k.len(), series.len());
}

#[test]
fn test_short_series_all_undefined_but_no_panic() {
  // 가장 긴 윈도우(20)보다 짧은 시계열: 선두 구간은 전부 None
  let series = mock_series(3, 10);
  let config = Config::default();
  let frame = IndicatorFrame::compute(&series, &config.indicators);

  assert!(frame.ma[&20].iter().all(|v| v.is_none()));
  assert!(frame.bollinger.upper.iter().all(|v| v.is_none()));
  // 9봉 스토캐스틱은 10봉 시계열에서 마지막 두 값만 정의될 수 있다
  assert!(frame.stochastic.rsv[..8].iter().all(|v| v.is_none()));
}
