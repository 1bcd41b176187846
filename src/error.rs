use chrono::NaiveDateTime;
use thiserror::Error;

pub type RulerResult<T> = Result<T, RulerError>;

#[derive(Debug, Error)]
pub enum RulerError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("unit size {value} is not part of the configured unit-size set")]
    InvalidUnitSize { value: u32 },

    #[error("invalid highlight interval: end {end} is before start {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Render(String),
}
