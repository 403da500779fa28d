//! Format constants shared by generation and validation.

/// Number of prefix characters.
pub const PREFIX_LEN: usize = 4;
/// Number of separator characters.
pub const SEPARATOR_LEN: usize = 1;
pub const SEPARATOR: u8 = b'-';
/// Shortest suffix accepted by validation.
pub const MIN_SUFFIX_LEN: usize = 4;
/// Longest suffix accepted by validation, and the length every generated suffix has.
pub const MAX_SUFFIX_LEN: usize = 6;

/// Size of the backing buffer of a [`crate::Yulid`].
pub const CAPACITY: usize = PREFIX_LEN + SEPARATOR_LEN + MAX_SUFFIX_LEN;
pub const MIN_LEN: usize = PREFIX_LEN + SEPARATOR_LEN + MIN_SUFFIX_LEN;
pub const MAX_LEN: usize = CAPACITY;

/// Characters allowed in both the prefix and the suffix.
pub const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Uppercase ASCII letter or ASCII digit.
#[must_use]
pub const fn is_alphanumeric(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit()
}
