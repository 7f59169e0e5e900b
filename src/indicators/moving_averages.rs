/**
* filename : moving_averages
* author : HAMA
* date: 2025. 6. 3.
* description:
**/

/// 단순 이동평균 (후행 윈도우, 현재 봉 포함)
/// 윈도우가 채워지기 전에는 None
pub fn simple_moving_average(values: &[f64], period: usize) -> Vec<Option<f64>> {
  let mut out = Vec::with_capacity(values.len());
  let mut sum = 0.0;

  for (i, value) in values.iter().enumerate() {
    sum += value;

    // 오래된 가격 제거 (윈도우 유지)
    if i >= period {
      sum -= values[i - period];
    }

    if i + 1 >= period {
      out.push(Some(sum / period as f64));
    } else {
      out.push(None);
    }
  }

  out
}

/// 지수 평활 (adjust=false 방식의 점화식)
/// `s_t = α·x_t + (1−α)·s_{t−1}`, 첫 정의값으로 시드
///
/// 입력이 None이면 출력도 None이며 누적값은 그대로 유지되고,
/// 다음 정의값부터 점화식을 이어간다.
pub fn exponential_smoothing(values: &[Option<f64>], alpha: f64) -> Vec<Option<f64>> {
  let mut out = Vec::with_capacity(values.len());
  let mut state: Option<f64> = None;

  for value in values {
    match value {
      Some(x) => {
        let next = match state {
          Some(prev) => alpha * x + (1.0 - alpha) * prev,
          None => *x,
        };
        state = Some(next);
        out.push(Some(next));
      }
      None => out.push(None),
    }
  }

  out
}
