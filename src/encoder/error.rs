use thiserror::Error;

pub type Result<T> = std::result::Result<T, EncodeError>;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Value needs {required} bytes, but the output buffer only has {available}")]
    BufferTooSmall { required: usize, available: usize },
    #[error("IOError while writing value")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
