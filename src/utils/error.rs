use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RtuError {
    #[error("{field} = {value} is out of range {}..={}", .range.start(), .range.end())]
    ParameterOutOfRange {
        field: &'static str,
        value: u32,
        range: RangeInclusive<u32>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<std::io::Error> for RtuError {
    fn from(err: std::io::Error) -> Self {
        RtuError::Transport(format!("IO error: {}", err))
    }
}

impl From<serialport::Error> for RtuError {
    fn from(err: serialport::Error) -> Self {
        RtuError::Connection(format!("Serial port error: {}", err))
    }
}
