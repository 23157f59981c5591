use crate::class::{tag, MAX_LEN, THREE_BYTE_OFFSET, TWO_BYTE_OFFSET};
use crate::{decoded_len, encoded_size};

pub use error::{DecodeError, Result};

mod error;

/// Whether `data` begins with a complete encoded value, i.e. whether [`decode`] can safely be
/// called on it. Only the tag byte and the length of `data` are inspected.
#[must_use]
pub fn is_decodable(data: &[u8]) -> bool {
    data.first()
        .is_some_and(|&tag| data.len() >= decoded_len(tag))
}

/// Decode the value at the start of `data`. Returns the value, and the number of bytes it
/// occupied so the caller can advance past it. Any bytes after the value are ignored.
///
/// The input is not checked for canonical form.
/// # Panics
/// Panics if `data` does not contain a complete value. Check with [`is_decodable`] first, or use
/// [`try_decode`].
#[must_use]
pub fn decode(data: &[u8]) -> (u64, usize) {
    let tag = data[0];
    let len = decoded_len(tag);
    let value = match len {
        1 => u64::from(tag),
        2 => (u64::from(tag - tag::TWO_BYTE_MIN) << 8) + u64::from(data[1]) + TWO_BYTE_OFFSET,
        3 => THREE_BYTE_OFFSET + u64::from(u16::from_be_bytes([data[1], data[2]])),
        _ => {
            let mut buf = [0_u8; 8];
            buf[MAX_LEN - len..].copy_from_slice(&data[1..len]);
            u64::from_be_bytes(buf)
        }
    };
    (value, len)
}

/// Decode the value at the start of `data`, checking that it is complete and canonical.
/// # Errors
/// - [`DecodeError::Empty`] if `data` is empty.
/// - [`DecodeError::Truncated`] if the tag byte calls for more bytes than `data` holds.
/// - [`DecodeError::NonCanonical`] if the value has a shorter encoding than the one given.
pub fn try_decode(data: &[u8]) -> Result<(u64, usize)> {
    let Some(&tag) = data.first() else {
        return Err(DecodeError::Empty);
    };
    let required = decoded_len(tag);
    if data.len() < required {
        return Err(DecodeError::Truncated {
            required,
            available: data.len(),
        });
    }
    let (value, len) = decode(data);
    if encoded_size(value) != len {
        return Err(DecodeError::NonCanonical { value, len });
    }
    Ok((value, len))
}
