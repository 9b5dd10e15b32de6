use thiserror::Error;

use crate::core::data::MAX_RECORD_COUNT;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("data source holds {count} records, limit is {MAX_RECORD_COUNT}")]
    TooManyRecords { count: usize },

    #[error("operation requires a non-empty data source")]
    MissingDataSource,

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
