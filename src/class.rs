/// The most bytes a single value can occupy once encoded.
pub const MAX_LEN: usize = 9;

/// Tag byte values. The tag byte is the first byte of every encoded value, and on its own
/// determines how many bytes follow it.
pub mod tag {
    /// Tags up to and including this one are the value itself.
    pub const ONE_BYTE_MAX: u8 = 0xF0;
    /// `0xF1..=0xF8` carry the high bits of a two byte value.
    pub const TWO_BYTE_MIN: u8 = 0xF1;
    pub const TWO_BYTE_MAX: u8 = 0xF8;
    /// Followed by a big-endian u16, offset by 2288.
    pub const OFFSET16: u8 = 0xF9;
    pub const U24: u8 = 0xFA;
    pub const U32: u8 = 0xFB;
    pub const U40: u8 = 0xFC;
    pub const U48: u8 = 0xFD;
    pub const U56: u8 = 0xFE;
    pub const U64: u8 = 0xFF;
}

// Inclusive upper bound of each length class
pub(crate) const ONE_BYTE_MAX: u64 = 240;
pub(crate) const TWO_BYTE_MAX: u64 = 2287;
pub(crate) const THREE_BYTE_MAX: u64 = 67_823;
pub(crate) const U24_MAX: u64 = (1 << 24) - 1;
pub(crate) const U32_MAX: u64 = (1 << 32) - 1;
pub(crate) const U40_MAX: u64 = (1 << 40) - 1;
pub(crate) const U48_MAX: u64 = (1 << 48) - 1;
pub(crate) const U56_MAX: u64 = (1 << 56) - 1;

/// Two byte values are stored as `value - 240`.
pub(crate) const TWO_BYTE_OFFSET: u64 = ONE_BYTE_MAX;
/// Three byte values are stored as `value - 2288`.
pub(crate) const THREE_BYTE_OFFSET: u64 = TWO_BYTE_MAX + 1;

/// The largest value each encoded length can hold, indexed by `length - 1`.
pub const CLASS_MAX: [u64; MAX_LEN] = [
    ONE_BYTE_MAX,
    TWO_BYTE_MAX,
    THREE_BYTE_MAX,
    U24_MAX,
    U32_MAX,
    U40_MAX,
    U48_MAX,
    U56_MAX,
    u64::MAX,
];

/// The total length of the encoded value beginning with `tag`, including the tag byte itself.
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn decoded_len(tag: u8) -> usize {
    match tag {
        0..=tag::ONE_BYTE_MAX => 1,
        tag::TWO_BYTE_MIN..=tag::TWO_BYTE_MAX => 2,
        // 0xF9 => 3 through 0xFF => 9
        _ => (tag - tag::OFFSET16) as usize + 3,
    }
}
