use std::fmt::{Display, Formatter};
use std::io::Write;

use crate::{decoder, encoder, Result};

/// An unsigned integer which is read and written in its variable-length encoding.
///
/// With the `serde` feature enabled, a [`VarUint`] serializes as its encoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct VarUint(pub u64);

impl VarUint {
    pub const MIN: VarUint = VarUint(u64::MIN);
    pub const MAX: VarUint = VarUint(u64::MAX);

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn encoded_size(self) -> usize {
        encoder::encoded_size(self.0)
    }

    /// Decode a value from the start of `data`. Returns the value and the number of bytes read.
    /// # Errors
    /// Returns [`crate::Error::Decode`] if `data` does not start with a complete, canonical value.
    pub fn from_bytes(data: &[u8]) -> Result<(VarUint, usize)> {
        let (value, len) = decoder::try_decode(data)?;
        Ok((VarUint(value), len))
    }

    /// Write the encoded value to `writer`, returning the number of bytes written.
    /// # Errors
    /// Returns [`crate::Error::Encode`] if the writer fails.
    pub fn write_to<W: Write>(self, writer: &mut W) -> Result<usize> {
        Ok(encoder::write_to(writer, self.0)?)
    }
}

impl From<u64> for VarUint {
    fn from(value: u64) -> Self {
        VarUint(value)
    }
}

impl From<VarUint> for u64 {
    fn from(value: VarUint) -> Self {
        value.0
    }
}

impl Display for VarUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
