pub mod serial;

pub use serial::{list_ports, Parity, SerialSettings, SerialTransport};

use crate::utils::error::RtuError;

/// Byte-oriented duplex channel the exchange runs over.
///
/// `read` returns up to `max_bytes`, possibly fewer (including none) once the
/// channel's read timeout elapses. It must never block indefinitely.
pub trait Transport {
    fn write(&mut self, bytes: &[u8]) -> Result<(), RtuError>;
    fn read(&mut self, max_bytes: usize) -> Result<Vec<u8>, RtuError>;
}
