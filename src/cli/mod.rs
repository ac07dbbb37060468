pub mod input;

pub use input::parse_request_line;
