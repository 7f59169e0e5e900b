//! 일봉 차트 지표 & 파동 주석 라이브러리
//!
//! OHLCV 일봉 시계열로부터 이동평균/볼린저밴드/KD 지표를 계산하고,
//! 피봇(국소 극값)을 탐지하여 휴리스틱 파동 라벨과 피보나치 목표가를 부여합니다.

pub mod config;
pub mod error;
pub mod indicators;
pub mod market_data;
pub mod models;
pub mod pipeline;
pub mod utils;
pub mod waves;

// 핵심 타입 재노출
pub use crate::error::ChartError;
pub use crate::models::price_bar::{PriceBar, PriceSeries};
pub use crate::models::annotation::{ChartAnalysis, ForecastSegment, Pivot, PivotKind, WaveLabel};
pub use crate::indicators::frame::IndicatorFrame;
pub use crate::market_data::source::PriceSource;
pub use crate::pipeline::ChartPipeline;

/// 버전 정보
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ChartError>;
