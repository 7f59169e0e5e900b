/**
* filename : lib
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Empty price series")]
    EmptySeries,

    #[error("Invalid price series: {0}")]
    InvalidSeries(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Insufficient data")]
    InsufficientData,

    #[error("Calculation error: {0}")]
    CalculationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}
