use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlaError {
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("Unknown priority: {0}")]
    UnknownPriority(String),
    #[error("Missing timestamp: {0}")]
    MissingTimestamp(&'static str),
}

pub type SlaResult<T> = Result<T, SlaError>;
