/**
* filename : stochastic
* author : HAMA
* date: 2025. 6. 3.
* description:
**/

use crate::utils::math::{rolling_max, rolling_min};
use super::moving_averages::exponential_smoothing;

/// KD 스토캐스틱 컬럼 묶음
///
/// RSV = (종가 − 기간 최저가) / (기간 최고가 − 기간 최저가) × 100
/// %K / %D 는 RSV의 지수 평활 (α = 1/3, adjust=false)
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stochastic {
  pub rsv: Vec<Option<f64>>,
  pub k: Vec<Option<f64>>,
  pub d: Vec<Option<f64>>,
}

impl Stochastic {
  pub fn compute(highs: &[f64], lows: &[f64], closes: &[f64], period: usize, alpha: f64) -> Self {
    let high_max = rolling_max(highs, period);
    let low_min = rolling_min(lows, period);

    let rsv: Vec<Option<f64>> = closes.iter().enumerate()
      .map(|(i, close)| match (high_max[i], low_min[i]) {
        (Some(hi), Some(lo)) => {
          let range = hi - lo;
          // 구간 전체가 동일 가격이면 정의되지 않음 (0으로 나누지 않는다)
          if range == 0.0 {
            None
          } else {
            Some((close - lo) / range * 100.0)
          }
        }
        _ => None,
      })
      .collect();

    let k = exponential_smoothing(&rsv, alpha);
    let d = exponential_smoothing(&k, alpha);

    Stochastic { rsv, k, d }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_high_rsv_is_100() {
    // 단조 상승: 마지막 봉 종가가 9일 최고가와 같으면 RSV = 100
    let closes: Vec<f64> = (1..=12).map(|i| 100.0 + i as f64).collect();
    let highs = closes.clone();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();

    let stoch = Stochastic::compute(&highs, &lows, &closes, 9, 1.0 / 3.0);

    assert!((stoch.rsv[11].unwrap() - 100.0).abs() < 1e-9);
  }

  #[test]
  fn test_zero_range_window_undefined() {
    let flat = vec![30.0; 15];
    let stoch = Stochastic::compute(&flat, &flat, &flat, 9, 1.0 / 3.0);

    for i in 8..15 {
      assert_eq!(stoch.rsv[i], None);
      assert_eq!(stoch.k[i], None);
    }
  }

  #[test]
  fn test_k_d_within_bounds() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + ((i * 7) % 13) as f64).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();

    let stoch = Stochastic::compute(&highs, &lows, &closes, 9, 1.0 / 3.0);

    for i in 0..closes.len() {
      if let Some(k) = stoch.k[i] {
        assert!((0.0..=100.0).contains(&k), "%K out of range at {}: {}", i, k);
      }
      if let Some(d) = stoch.d[i] {
        assert!((0.0..=100.0).contains(&d), "%D out of range at {}: {}", i, d);
      }
    }
  }
}
