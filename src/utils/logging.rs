//! 로깅 유틸리티
//!
//! 로그 초기화 및 유틸리티 함수 제공

use env_logger::Builder;
use log::LevelFilter;
use std::env;

use crate::error::ChartError;

/// 로깅 시스템 초기화
pub fn init() -> Result<(), ChartError> {
    let mut builder = Builder::from_default_env();

    // RUST_LOG 환경변수 확인
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // 로그 레벨 파싱
    let level_filter = match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    builder
      .filter_level(level_filter)
      .format_timestamp_millis()
      .init();

    log::info!("로깅 시스템 초기화 완료: 레벨 = {}", log_level);

    Ok(())
}

/// 분석 작업 시작 로그
pub fn log_analysis_start(symbol: &str, bars: usize) {
    log::info!("차트 분석 시작: {} - 봉 수: {}", symbol, bars);
}

/// 분석 작업 종료 로그
pub fn log_analysis_end(symbol: &str, pivots: usize, labeled: usize, forecast: bool) {
    log::info!("차트 분석 완료: {} - 피봇: {} - 라벨: {} - 목표가: {}",
               symbol, pivots, labeled, if forecast { "있음" } else { "없음" });
}

/// 오류 로그
pub fn log_error(context: &str, error: &ChartError) {
    log::error!("오류 발생 - {}: {}", context, error);
}
