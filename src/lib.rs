#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! A variable-length encoding for `u64` where the first byte of an encoded value determines its
//! total length, between 1 and [`MAX_LEN`] bytes. Values up to 240 take a single byte.
//!
//! | Value range            | Bytes | Tag byte        |
//! |------------------------|-------|-----------------|
//! | `0..=240`              | 1     | the value       |
//! | `241..=2287`           | 2     | `0xF1..=0xF8`   |
//! | `2288..=67823`         | 3     | `0xF9`          |
//! | `67824..=2^24 - 1`     | 4     | `0xFA`          |
//! | `2^24..=2^32 - 1`      | 5     | `0xFB`          |
//! | `2^32..=2^40 - 1`      | 6     | `0xFC`          |
//! | `2^40..=2^48 - 1`      | 7     | `0xFD`          |
//! | `2^48..=2^56 - 1`      | 8     | `0xFE`          |
//! | `2^56..=2^64 - 1`      | 9     | `0xFF`          |
//!
//! Payload bytes following the tag are big-endian.
//!
//! ```
//! let mut buf = [0_u8; varuint::MAX_LEN];
//! let len = varuint::encode(&mut buf, 67_824);
//! assert_eq!(&buf[..len], &[0xFA, 0x01, 0x08, 0xF0]);
//! assert!(varuint::is_decodable(&buf[..len]));
//! assert_eq!(varuint::decode(&buf), (67_824, 4));
//! ```

mod class;
mod decoder;
mod encoder;
mod error;
mod value;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

pub use class::{decoded_len, tag, CLASS_MAX, MAX_LEN};
pub use decoder::{decode, is_decodable, try_decode, DecodeError};
pub use encoder::{encode, encoded_size, try_encode, write_to, EncodeError};
pub use error::{Error, Result};
pub use value::VarUint;
