/**
* filename : labeler
* author : HAMA
* date: 2025. 6. 5.
* description:
**/

use crate::models::annotation::{Pivot, WaveLabel};

/// 피봇 선별 (탐욕적 좌→우 필터)
///
/// 첫 피봇은 무조건 수용. 이후 후보는 마지막으로 *수용된* 피봇 기준으로
/// 간격이 `min_spacing` 봉 미만이거나 상대 가격 변화가 `min_change` 미만이면
/// 버린다. Peak/Trough 교대는 강제하지 않는다 — 간격과 가격 변화만 보는
/// 휴리스틱이며, 같은 종류의 피봇이 연속으로 남을 수 있다.
pub fn filter_pivots(pivots: &[Pivot], min_spacing: usize, min_change: f64) -> Vec<Pivot> {
  let mut accepted: Vec<Pivot> = Vec::new();

  for pivot in pivots {
    match accepted.last() {
      None => accepted.push(pivot.clone()),
      Some(last) => {
        if pivot.index - last.index < min_spacing {
          continue;
        }
        let change = (pivot.price - last.price).abs() / last.price;
        if change < min_change {
          continue;
        }
        accepted.push(pivot.clone());
      }
    }
  }

  accepted
}

/// 파동 라벨 부여
///
/// 선별된 피봇 중 마지막 K개(K = 라벨 집합 크기)에 시간순으로 라벨을 붙인다.
/// K개 미만이면 라벨을 전혀 부여하지 않는다 — 주석은 선택 사항이며
/// 실패가 아니다.
pub fn assign_labels(filtered: &[Pivot], labels: &[String]) -> Vec<WaveLabel> {
  if filtered.len() < labels.len() {
    return Vec::new();
  }

  let tail = &filtered[filtered.len() - labels.len()..];

  tail.iter()
    .zip(labels.iter())
    .map(|(pivot, label)| WaveLabel {
      label: label.clone(),
      pivot: pivot.clone(),
    })
    .collect()
}
