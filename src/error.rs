use crate::decoder::DecodeError;
use crate::encoder::EncodeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Encode {0}")]
    Encode(#[from] EncodeError),
    #[error("Decode {0}")]
    Decode(#[from] DecodeError),
}

pub type Result<T> = core::result::Result<T, Error>;
