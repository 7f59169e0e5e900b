/**
* filename : pipeline
* author : HAMA
* date: 2025. 6. 7.
* description:
**/

use crate::config::Config;
use crate::error::ChartError;
use crate::indicators::frame::IndicatorFrame;
use crate::models::annotation::ChartAnalysis;
use crate::models::price_bar::PriceSeries;
use crate::waves::detector::detect_pivots;
use crate::waves::labeler::{assign_labels, filter_pivots};
use crate::waves::projector::project_forecast;

/// 설정된 분석 파이프라인
///
/// 생성 시 설정을 받고, `run`은 시계열만의 순수 함수다. 내부 상태가 없으므로
/// 같은 입력에 대해 항상 같은 결과를 낸다 (결정적, 멱등).
#[derive(Debug, Clone)]
pub struct ChartPipeline {
    config: Config,
}

impl ChartPipeline {
    pub fn new(config: Config) -> Result<Self, ChartError> {
        config.validate()?;
        Ok(ChartPipeline { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 지표 계산 → 피봇 탐지 → 선별/라벨링 → 목표가 투영
    ///
    /// 피봇이 라벨 집합보다 적으면 라벨과 목표가 없이 지표만 담겨 나온다.
    pub fn run(&self, series: &PriceSeries) -> Result<ChartAnalysis, ChartError> {
        if series.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        let frame = IndicatorFrame::compute(series, &self.config.indicators);

        let raw = detect_pivots(series, self.config.waves.pivot_half_width);
        let pivots = filter_pivots(&raw, self.config.waves.min_spacing, self.config.waves.min_change);
        let labels = assign_labels(&pivots, &self.config.waves.labels);
        let forecast = project_forecast(&labels, self.config.forecast.ratio, self.config.forecast.horizon_days);

        log::debug!("파이프라인 결과: 피봇 {} -> 선별 {} -> 라벨 {}",
                    raw.len(), pivots.len(), labels.len());

        Ok(ChartAnalysis {
            symbol: self.config.source.symbol.clone(),
            frame,
            pivots,
            labels,
            forecast,
        })
    }
}
