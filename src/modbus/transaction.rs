use log::{debug, info, warn};

use super::frame::{attach_crc, build_request, extract_payload, verify_crc, RequestParams};
use crate::transport::Transport;
use crate::utils::error::RtuError;

/// Upper bound on the bytes read back for a single response.
pub const RESPONSE_READ_CAP: usize = 100;

/// Verdict of the response check for one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    /// CRC trailer mismatch, or a response too short to carry one.
    CrcMismatch,
}

/// Record of one completed request/response exchange.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub request: Vec<u8>,
    pub response: Vec<u8>,
    pub outcome: Outcome,
}

impl Transaction {
    /// Register data of the response, available only when the CRC checked out.
    pub fn payload(&self) -> Option<&[u8]> {
        match self.outcome {
            Outcome::Valid => Some(extract_payload(&self.response)),
            Outcome::CrcMismatch => None,
        }
    }
}

/// Runs a single write → read → validate exchange.
///
/// The transport is taken by value and dropped before returning, so the
/// underlying channel is released on every exit path, transport failure
/// included. A CRC mismatch is an `Outcome`, not an error; only write/read
/// failures propagate as `Err`.
pub fn execute<T: Transport>(
    mut transport: T,
    params: &RequestParams,
) -> Result<Transaction, RtuError> {
    info!(
        "📊 Reading {} registers from device {} starting at address {}",
        params.register_count, params.slave_address, params.starting_register
    );

    let request = attach_crc(build_request(params));
    transport.write(&request)?;

    let response = transport.read(RESPONSE_READ_CAP)?;
    debug!("Received {} byte(s)", response.len());

    let outcome = if verify_crc(&response) {
        Outcome::Valid
    } else {
        warn!("CRC validation failed on {} byte response", response.len());
        Outcome::CrcMismatch
    };

    Ok(Transaction {
        request,
        response,
        outcome,
    })
}
