/**
* filename : bollinger
* author : HAMA
* date: 2025. 6. 3.
* description:
**/

use crate::utils::math::{average, population_std, rolling_apply};

/// 볼린저밴드 컬럼 묶음
/// 중심선은 동일 기간 단순 이동평균, 밴드 폭은 모표준편차 × 배수
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BollingerBands {
  pub mid: Vec<Option<f64>>,
  pub std: Vec<Option<f64>>,
  pub upper: Vec<Option<f64>>,
  pub lower: Vec<Option<f64>>,
}

impl BollingerBands {
  pub fn compute(closes: &[f64], period: usize, width: f64) -> Self {
    let mid = rolling_apply(closes, period, average);
    let std = rolling_apply(closes, period, population_std);

    let upper = mid.iter().zip(std.iter())
      .map(|(m, s)| match (m, s) {
        (Some(m), Some(s)) => Some(m + width * s),
        _ => None,
      })
      .collect();

    let lower = mid.iter().zip(std.iter())
      .map(|(m, s)| match (m, s) {
        (Some(m), Some(s)) => Some(m - width * s),
        _ => None,
      })
      .collect();

    BollingerBands { mid, std, upper, lower }
  }
}
