/**
* filename : frame
* author : HAMA
* date: 2025. 6. 3.
* description:
**/

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::config::IndicatorConfig;
use crate::models::price_bar::PriceSeries;
use super::bollinger::BollingerBands;
use super::moving_averages::simple_moving_average;
use super::stochastic::Stochastic;

/// 봉 인덱스별 지표 컬럼 묶음. 모든 컬럼의 길이는 시계열 길이와 같고,
/// 윈도우가 채워지기 전의 값은 None이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    /// 기간별 단순 이동평균 (키 = 기간)
    pub ma: BTreeMap<usize, Vec<Option<f64>>>,
    pub bollinger: BollingerBands,
    pub stochastic: Stochastic,
}

impl IndicatorFrame {
    /// 시계열과 설정 상수만의 순수 함수. 부수효과 없음.
    pub fn compute(series: &PriceSeries, config: &IndicatorConfig) -> Self {
        let closes = series.closes();
        let highs = series.highs();
        let lows = series.lows();

        let mut ma = BTreeMap::new();
        for &period in &config.ma_periods {
            ma.insert(period, simple_moving_average(&closes, period));
        }

        let bollinger = BollingerBands::compute(&closes, config.bollinger_period, config.bollinger_width);
        let stochastic = Stochastic::compute(&highs, &lows, &closes, config.stochastic_period, config.smoothing_alpha);

        IndicatorFrame { ma, bollinger, stochastic }
    }

    pub fn len(&self) -> usize {
        self.bollinger.mid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bollinger.mid.is_empty()
    }
}
