//! One-shot Modbus RTU register probe.
//!
//! Builds a single read-registers request frame, sends it over a serial
//! line, and validates the CRC-16/Modbus trailer of whatever comes back.
//! Exactly one request/response exchange per invocation.

pub mod cli;
pub mod modbus;
pub mod output;
pub mod transport;
pub mod utils;

// Re-export commonly used types
pub use cli::parse_request_line;
pub use modbus::{crc16_modbus, execute, Outcome, RequestParams, Transaction};
pub use output::HexFormatter;
pub use transport::{SerialSettings, SerialTransport, Transport};
pub use utils::error::RtuError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
