use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Input data is empty")]
    Empty,
    #[error("Value expected to be {required} bytes, but only {available} bytes are available")]
    Truncated { required: usize, available: usize },
    #[error("Value {value} was encoded in {len} bytes, which is longer than its canonical encoding")]
    NonCanonical { value: u64, len: usize },
}
