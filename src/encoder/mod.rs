use crate::class::{
    tag, CLASS_MAX, MAX_LEN, ONE_BYTE_MAX, THREE_BYTE_MAX, THREE_BYTE_OFFSET, TWO_BYTE_MAX,
    TWO_BYTE_OFFSET, U24_MAX, U32_MAX, U40_MAX, U48_MAX, U56_MAX,
};
use crate::decoded_len;
use static_assertions::const_assert;
use std::io::Write;

pub use error::{EncodeError, Result};

mod error;

const_assert!(tag::ONE_BYTE_MAX as u64 == ONE_BYTE_MAX);
const_assert!(decoded_len(tag::U64) == MAX_LEN);
const_assert!(classes_are_contiguous());

// Every class maximum must encode to its own length, and the value after it to the next length
const fn classes_are_contiguous() -> bool {
    let mut i = 0;
    while i < MAX_LEN {
        if encoded_size(CLASS_MAX[i]) != i + 1 {
            return false;
        }
        if i + 1 < MAX_LEN && encoded_size(CLASS_MAX[i] + 1) != i + 2 {
            return false;
        }
        i += 1;
    }
    true
}

/// The number of bytes `value` occupies once encoded, between 1 and [`MAX_LEN`].
#[must_use]
pub const fn encoded_size(value: u64) -> usize {
    if value <= ONE_BYTE_MAX {
        1
    } else if value <= TWO_BYTE_MAX {
        2
    } else if value <= THREE_BYTE_MAX {
        3
    } else if value <= U24_MAX {
        4
    } else if value <= U32_MAX {
        5
    } else if value <= U40_MAX {
        6
    } else if value <= U48_MAX {
        7
    } else if value <= U56_MAX {
        8
    } else {
        MAX_LEN
    }
}

/// Encode `value` into the start of `out`, returning the number of bytes written.
///
/// A buffer of [`MAX_LEN`] bytes is always large enough. Use [`encoded_size`] to size it exactly.
/// # Panics
/// Panics if `out` is shorter than `encoded_size(value)`. See [`try_encode`] for a checked version.
#[allow(clippy::cast_possible_truncation)]
pub fn encode(out: &mut [u8], value: u64) -> usize {
    let len = encoded_size(value);
    match len {
        1 => out[0] = value as u8,
        2 => {
            let offset = value - TWO_BYTE_OFFSET;
            out[..2].copy_from_slice(&[tag::TWO_BYTE_MIN + (offset >> 8) as u8, offset as u8]);
        }
        3 => {
            let offset = (value - THREE_BYTE_OFFSET) as u16;
            out[0] = tag::OFFSET16;
            out[1..3].copy_from_slice(&offset.to_be_bytes());
        }
        _ => {
            // The payload is the low `len - 1` bytes of the big-endian value
            out[0] = tag::U24 + (len - 4) as u8;
            out[1..len].copy_from_slice(&value.to_be_bytes()[MAX_LEN - len..]);
        }
    }
    len
}

/// Encode `value` into the start of `out`, returning the number of bytes written.
/// # Errors
/// Returns [`EncodeError::BufferTooSmall`] if `out` cannot hold the encoded value. Nothing is
/// written in that case.
pub fn try_encode(out: &mut [u8], value: u64) -> Result<usize> {
    let required = encoded_size(value);
    if out.len() < required {
        return Err(EncodeError::BufferTooSmall {
            required,
            available: out.len(),
        });
    }
    Ok(encode(out, value))
}

/// Encode `value` and write it to `writer`, returning the number of bytes written.
/// # Errors
/// Returns [`EncodeError::Io`] if the writer fails.
pub fn write_to<W: Write>(writer: &mut W, value: u64) -> Result<usize> {
    let mut buf = [0_u8; MAX_LEN];
    let len = encode(&mut buf, value);
    writer.write_all(&buf[..len])?;
    Ok(len)
}
