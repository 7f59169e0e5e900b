/**
* filename : projector
* author : HAMA
* date: 2025. 6. 5.
* description:
**/

use chrono::Duration;

use crate::models::annotation::{ForecastSegment, WaveLabel};

/// 피보나치 확장 목표가 투영
///
/// "A", "B" 라벨이 모두 있을 때만 세그먼트 하나를 만든다.
/// `target = price_B + direction × |price_B − price_A| × ratio`,
/// 목표 날짜는 `date_B + horizon_days` (달력일) — 주기성 분석이 아니라
/// 고정 수평 거리다. 차트 장식용이며 매매 신호가 아니다.
pub fn project_forecast(labels: &[WaveLabel], ratio: f64, horizon_days: i64) -> Option<ForecastSegment> {
  let a = labels.iter().find(|w| w.label == "A")?;
  let b = labels.iter().find(|w| w.label == "B")?;

  let direction = if b.pivot.price > a.pivot.price {
    1.0
  } else if b.pivot.price < a.pivot.price {
    -1.0
  } else {
    0.0
  };

  let swing = (b.pivot.price - a.pivot.price).abs();
  let target_price = b.pivot.price + direction * swing * ratio;
  let target_date = b.pivot.date + Duration::days(horizon_days);

  Some(ForecastSegment {
    start_date: b.pivot.date,
    start_price: b.pivot.price,
    target_date,
    target_price,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::annotation::{Pivot, PivotKind};
  use chrono::NaiveDate;

  fn wave(label: &str, index: usize, price: f64, kind: PivotKind) -> WaveLabel {
    let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    WaveLabel {
      label: label.to_string(),
      pivot: Pivot {
        index,
        date: start + chrono::Duration::days(index as i64),
        price,
        kind,
      },
    }
  }

  #[test]
  fn test_upward_swing_extension() {
    let labels = vec![
      wave("A", 40, 100.0, PivotKind::Trough),
      wave("B", 50, 110.0, PivotKind::Peak),
    ];

    let segment = project_forecast(&labels, 0.618, 21).unwrap();

    // 110 + 1 × |110−100| × 0.618 = 116.18
    assert!((segment.target_price - 116.18).abs() < 1e-9);
    assert_eq!(segment.start_price, 110.0);
    assert_eq!(segment.target_date, segment.start_date + Duration::days(21));
  }

  #[test]
  fn test_downward_swing_extension() {
    let labels = vec![
      wave("A", 40, 110.0, PivotKind::Peak),
      wave("B", 50, 100.0, PivotKind::Trough),
    ];

    let segment = project_forecast(&labels, 0.618, 21).unwrap();

    assert!((segment.target_price - 93.82).abs() < 1e-9);
  }

  #[test]
  fn test_missing_labels_yield_no_forecast() {
    let labels = vec![wave("B", 50, 110.0, PivotKind::Peak)];
    assert!(project_forecast(&labels, 0.618, 21).is_none());
    assert!(project_forecast(&[], 0.618, 21).is_none());
  }
}
