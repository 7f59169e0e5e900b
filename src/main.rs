/**
* filename : main
* author : HAMA
* date: 2025. 6. 7.
* description:
**/

use xWave::config::Config;
use xWave::market_data::source::{CsvPriceSource, MockPriceSource, PriceSource};
use xWave::pipeline::ChartPipeline;
use xWave::utils::logging;

fn main() -> Result<(), anyhow::Error> {
    // 로깅 초기화
    logging::init()?;
    log::info!("차트 분석 파이프라인 시작... (v{})", xWave::VERSION);

    // 설정 로드
    let mut config = Config::load()?;
    log::info!("설정 로드 완료: {}", config.source.symbol);

    // 명령줄 인수 확인 (CSV 경로 재지정)
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        config.source.csv_path = Some(args[1].clone());
    }

    let symbol = config.source.symbol.clone();
    let lookback = config.source.lookback_days;

    // 가격 시계열 공급자 선택: CSV가 없으면 데모용 랜덤워크
    let series = match &config.source.csv_path {
        Some(path) => CsvPriceSource::new(path).fetch(&symbol, lookback)?,
        None => {
            log::warn!("CSV 경로 미지정 - 데모용 모의 시계열 사용");
            MockPriceSource::new(2025, 100.0).fetch(&symbol, lookback)?
        }
    };

    logging::log_analysis_start(&symbol, series.len());

    // 파이프라인 실행
    let pipeline = ChartPipeline::new(config)?;
    let analysis = pipeline.run(&series)?;

    logging::log_analysis_end(
        &symbol,
        analysis.pivots.len(),
        analysis.labels.len(),
        analysis.forecast.is_some(),
    );

    // 렌더링 협력자에게 넘길 구조화 결과를 stdout으로 출력
    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}
