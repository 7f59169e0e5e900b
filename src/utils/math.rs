//! 수학 관련 유틸리티
//!
//! 평균, 모표준편차, 롤링 윈도우 계산 함수 제공

/// 평균 계산
pub fn average(values: &[f64]) -> Option<f64> {
  if values.is_empty() {
    return None;
  }

  Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// 모표준편차 계산 (분모 = n, 볼린저밴드 폭 관례와 일치)
pub fn population_std(values: &[f64]) -> Option<f64> {
  if values.is_empty() {
    return None;
  }

  let avg = average(values)?;
  let variance = values.iter()
    .map(|value| {
      let diff = avg - *value;
      diff * diff
    })
    .sum::<f64>() / values.len() as f64;

  Some(variance.sqrt())
}

/// 후행 윈도우(포함)를 순서대로 함수에 적용
/// 윈도우가 채워지기 전의 인덱스는 None
pub fn rolling_apply<F>(values: &[f64], period: usize, f: F) -> Vec<Option<f64>>
where
  F: Fn(&[f64]) -> Option<f64>,
{
  let mut out = Vec::with_capacity(values.len());

  for i in 0..values.len() {
    if i + 1 < period {
      out.push(None);
    } else {
      out.push(f(&values[i + 1 - period..=i]));
    }
  }

  out
}

/// 후행 윈도우 최솟값
pub fn rolling_min(values: &[f64], period: usize) -> Vec<Option<f64>> {
  rolling_apply(values, period, |w| {
    w.iter().copied().fold(None, |acc: Option<f64>, v| {
      Some(match acc {
        Some(a) if a <= v => a,
        _ => v,
      })
    })
  })
}

/// 후행 윈도우 최댓값
pub fn rolling_max(values: &[f64], period: usize) -> Vec<Option<f64>> {
  rolling_apply(values, period, |w| {
    w.iter().copied().fold(None, |acc: Option<f64>, v| {
      Some(match acc {
        Some(a) if a >= v => a,
        _ => v,
      })
    })
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_average() {
    assert_eq!(average(&[]), None);
    assert_eq!(average(&[1.0, 2.0, 3.0]), Some(2.0));
  }

  #[test]
  fn test_population_std() {
    // 모표준편차: [2,4,4,4,5,5,7,9] -> 2.0
    let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let std = population_std(&values).unwrap();
    assert!((std - 2.0).abs() < 1e-12);
  }

  #[test]
  fn test_rolling_apply_leading_none() {
    let values = vec![1.0, 2.0, 3.0, 4.0];
    let out = rolling_apply(&values, 3, average);

    assert_eq!(out[0], None);
    assert_eq!(out[1], None);
    assert_eq!(out[2], Some(2.0));
    assert_eq!(out[3], Some(3.0));
  }

  #[test]
  fn test_rolling_min_max() {
    let values = vec![3.0, 1.0, 4.0, 1.0, 5.0];
    let mins = rolling_min(&values, 3);
    let maxs = rolling_max(&values, 3);

    assert_eq!(mins, vec![None, None, Some(1.0), Some(1.0), Some(1.0)]);
    assert_eq!(maxs, vec![None, None, Some(4.0), Some(4.0), Some(5.0)]);
  }
}
