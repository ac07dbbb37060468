pub mod crc;
pub mod frame;
pub mod transaction;

pub use crc::crc16_modbus;
pub use frame::{attach_crc, build_request, extract_payload, verify_crc, RequestParams};
pub use transaction::{execute, Outcome, Transaction, RESPONSE_READ_CAP};
