use super::crc::crc16_modbus;
use crate::utils::error::RtuError;

/// Request frame length before the CRC trailer.
pub const REQUEST_LEN: usize = 6;
/// Request frame length including the CRC trailer.
pub const REQUEST_LEN_WITH_CRC: usize = 8;

/// Logical fields of a read-registers request, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestParams {
    pub slave_address: u8,
    pub function_code: u8,
    pub starting_register: u16,
    pub register_count: u16,
}

impl RequestParams {
    /// Builds validated request parameters.
    ///
    /// Arguments are taken wide so that out-of-range raw input reports a
    /// `ParameterOutOfRange` naming the field instead of being truncated.
    /// No clamping is performed.
    pub fn new(
        slave_address: u32,
        function_code: u32,
        starting_register: u32,
        register_count: u32,
    ) -> Result<Self, RtuError> {
        check_range("slave address", slave_address, 0..=255)?;
        check_range("function code", function_code, 0..=255)?;
        check_range("starting register", starting_register, 0..=65535)?;
        check_range("register count", register_count, 1..=125)?;

        Ok(Self {
            slave_address: slave_address as u8,
            function_code: function_code as u8,
            starting_register: starting_register as u16,
            register_count: register_count as u16,
        })
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: std::ops::RangeInclusive<u32>,
) -> Result<(), RtuError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(RtuError::ParameterOutOfRange {
            field,
            value,
            range,
        })
    }
}

/// Packs the request fields into the 6-byte wire layout.
///
/// Address and function code are single bytes; starting register and count
/// are big-endian u16 per the Modbus RTU convention. The CRC trailer that
/// `attach_crc` appends is little-endian, deliberately the opposite order.
pub fn build_request(params: &RequestParams) -> [u8; REQUEST_LEN] {
    let start = params.starting_register.to_be_bytes();
    let count = params.register_count.to_be_bytes();
    [
        params.slave_address,
        params.function_code,
        start[0],
        start[1],
        count[0],
        count[1],
    ]
}

/// Appends the CRC of `frame` as a little-endian trailer.
pub fn attach_crc(frame: [u8; REQUEST_LEN]) -> Vec<u8> {
    let mut out = Vec::with_capacity(REQUEST_LEN_WITH_CRC);
    out.extend_from_slice(&frame);
    out.extend_from_slice(&crc16_modbus(&frame).to_le_bytes());
    out
}

/// Checks the little-endian CRC trailer of a received frame.
///
/// A frame of 2 bytes or fewer cannot hold both a payload and a CRC and
/// always fails. Never errors.
pub fn verify_crc(response: &[u8]) -> bool {
    if response.len() <= 2 {
        return false;
    }
    let body_len = response.len() - 2;
    let received_crc = u16::from_le_bytes([response[body_len], response[body_len + 1]]);
    crc16_modbus(&response[..body_len]) == received_crc
}

/// Register data of a CRC-valid read response: everything between the 2-byte
/// header (address, function code) plus byte count and the CRC trailer.
///
/// Assumes the conventional read-response shape; the echoed function code
/// and exception frames (0x80-offset codes) are not checked.
pub fn extract_payload(response: &[u8]) -> &[u8] {
    if response.len() < 5 {
        return &[];
    }
    &response[3..response.len() - 2]
}
