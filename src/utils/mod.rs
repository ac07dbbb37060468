pub mod error;

pub use error::RtuError;
