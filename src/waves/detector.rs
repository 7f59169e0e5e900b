/**
* filename : detector
* author : HAMA
* date: 2025. 6. 5.
* description:
**/

use crate::models::annotation::{Pivot, PivotKind};
use crate::models::price_bar::PriceSeries;

/// 종가 기준 국소 극값 탐지
///
/// 대칭 윈도우 `[i−w, i+w]` 안에서 종가가 최댓값이면 Peak, 최솟값이면 Trough.
/// 동일 극값이 왼쪽 윈도우에 이미 등장했으면 건너뛴다 (첫 등장 우선 — 고원
/// 구간은 첫 봉 하나만 배출). 양쪽 조건이 동시에 성립하면 Peak 우선.
/// 윈도우가 완전히 들어가는 내부 구간 `w ≤ i < L−w` 만 검사하므로
/// `2w+1` 봉보다 짧은 추세는 구조적으로 보이지 않는다.
pub fn detect_pivots(series: &PriceSeries, half_width: usize) -> Vec<Pivot> {
  let closes = series.closes();
  let dates = series.dates();
  let len = closes.len();
  let mut pivots = Vec::new();

  if len < 2 * half_width + 1 {
    return pivots;
  }

  for i in half_width..len - half_width {
    let window = &closes[i - half_width..=i + half_width];
    let max = window.iter().copied().fold(f64::MIN, f64::max);
    let min = window.iter().copied().fold(f64::MAX, f64::min);
    let left = &closes[i - half_width..i];

    let is_peak = closes[i] == max && !left.iter().any(|&x| x == max);
    let is_trough = closes[i] == min && !left.iter().any(|&x| x == min);

    if is_peak {
      pivots.push(Pivot { index: i, date: dates[i], price: closes[i], kind: PivotKind::Peak });
    } else if is_trough {
      pivots.push(Pivot { index: i, date: dates[i], price: closes[i], kind: PivotKind::Trough });
    }
  }

  pivots
}
