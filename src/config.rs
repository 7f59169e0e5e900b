/**
* filename : config
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ChartError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    pub indicators: IndicatorConfig,
    pub waves: WaveConfig,
    pub forecast: ForecastConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub symbol: String,
    pub lookback_days: u32,
    pub csv_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// 이동평균 기간 목록
    pub ma_periods: Vec<usize>,
    /// 볼린저밴드 기간
    pub bollinger_period: usize,
    /// 볼린저밴드 폭 (표준편차 배수)
    pub bollinger_width: f64,
    /// KD 스토캐스틱 기간
    pub stochastic_period: usize,
    /// %K / %D 지수 평활 계수
    pub smoothing_alpha: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveConfig {
    /// 피봇 탐지 윈도우 반폭 (전체 윈도우 = 2w+1)
    pub pivot_half_width: usize,
    /// 직전 수용 피봇과의 최소 간격 (봉 수)
    pub min_spacing: usize,
    /// 직전 수용 피봇 대비 최소 가격 변화율
    pub min_change: f64,
    /// 파동 라벨 집합 (시간순으로 부여)
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// 피보나치 확장 비율 (기본 0.618, 보조 목표가는 0.382)
    pub ratio: f64,
    /// 목표가까지의 수평 거리 (달력일)
    pub horizon_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Config {
    /// Load configuration from a file
    pub fn load() -> Result<Self, ChartError> {
        // Try to load from config.json
        let config_path = Path::new("config.json");

        if config_path.exists() {
            let mut file = File::open(config_path)
                .map_err(|e| ChartError::ConfigError(format!("Failed to open config file: {}", e)))?;

            let mut contents = String::new();
            file.read_to_string(&mut contents)
                .map_err(|e| ChartError::ConfigError(format!("Failed to read config file: {}", e)))?;

            let mut cfg: Config = serde_json::from_str(&contents)
                .map_err(|e| ChartError::ConfigError(format!("Failed to parse config file: {}", e)))?;
            // environment overrides
            cfg.apply_env_overrides();
            cfg.validate()?;
            Ok(cfg)
        } else {
            // Return default configuration
            let mut cfg = Config::default();
            cfg.apply_env_overrides();
            Ok(cfg)
        }
    }

    /// Apply environment variable overrides for runtime fields
    fn apply_env_overrides(&mut self) {
        use std::env;
        if let Ok(v) = env::var("CHART_SYMBOL") { if !v.is_empty() { self.source.symbol = v; } }
        if let Ok(v) = env::var("CHART_CSV_PATH") { if !v.is_empty() { self.source.csv_path = Some(v); } }
        if let Ok(v) = env::var("CHART_LOOKBACK_DAYS") {
            if let Ok(days) = v.parse::<u32>() { self.source.lookback_days = days; }
        }
    }

    /// Reject parameter combinations the pipeline cannot run with
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.indicators.ma_periods.is_empty() || self.indicators.ma_periods.contains(&0) {
            return Err(ChartError::InvalidParameter("ma_periods must be non-empty, positive".to_string()));
        }
        if self.indicators.bollinger_period == 0 || self.indicators.stochastic_period == 0 {
            return Err(ChartError::InvalidParameter("indicator periods must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.indicators.smoothing_alpha) || self.indicators.smoothing_alpha == 0.0 {
            return Err(ChartError::InvalidParameter("smoothing_alpha must be in (0, 1]".to_string()));
        }
        if self.waves.pivot_half_width == 0 {
            return Err(ChartError::InvalidParameter("pivot_half_width must be positive".to_string()));
        }
        if self.waves.labels.is_empty() {
            return Err(ChartError::InvalidParameter("wave label set must not be empty".to_string()));
        }
        if self.forecast.ratio <= 0.0 {
            return Err(ChartError::InvalidParameter("forecast ratio must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: SourceConfig {
                symbol: "0050.TW".to_string(),
                lookback_days: 70,
                csv_path: None,
            },
            indicators: IndicatorConfig {
                ma_periods: vec![5, 14, 20],
                bollinger_period: 20,
                bollinger_width: 2.0,
                stochastic_period: 9,
                smoothing_alpha: 1.0 / 3.0,
            },
            waves: WaveConfig {
                pivot_half_width: 3,
                min_spacing: 3,
                min_change: 0.015,
                labels: vec![
                    "1".to_string(), "2".to_string(), "3".to_string(), "4".to_string(),
                    "5".to_string(), "A".to_string(), "B".to_string(), "C".to_string(),
                ],
            },
            forecast: ForecastConfig {
                ratio: 0.618,
                horizon_days: 21,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
