use crate::alphabet::{MAX_LEN, MIN_LEN, PREFIX_LEN, SEPARATOR, SEPARATOR_LEN, is_alphanumeric};
use crate::error::{Result, YulidError};
use crate::yulid::{Yulid, render_bytes};

/// Checks that `id` is a well-formed YULID.
///
/// # Errors
///
/// See [`validate_bytes`].
pub fn validate(id: &Yulid) -> Result<()> {
    validate_bytes(id.raw())
}

/// Checks raw bytes against the YULID format rules.
///
/// Only the rendered region (everything before the first zero byte) is
/// inspected. Rules are applied in order and the first failure is returned.
///
/// # Errors
///
/// - `InvalidLength` if the rendered region is not 9 to 11 bytes long
/// - `InvalidPrefix` if one of the first four bytes is outside `A-Z0-9`
/// - `InvalidSeparator` if byte 4 is not `-`
/// - `InvalidSuffix` if a byte after the separator is outside `A-Z0-9`
pub fn validate_bytes(bytes: &[u8]) -> Result<()> {
    let rendered = render_bytes(bytes);
    let len = rendered.len();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(YulidError::InvalidLength { len });
    }

    if !rendered[..PREFIX_LEN].iter().copied().all(is_alphanumeric) {
        return Err(YulidError::InvalidPrefix);
    }

    if rendered[PREFIX_LEN] != SEPARATOR {
        return Err(YulidError::InvalidSeparator);
    }

    if !rendered[PREFIX_LEN + SEPARATOR_LEN..]
        .iter()
        .copied()
        .all(is_alphanumeric)
    {
        return Err(YulidError::InvalidSuffix);
    }

    Ok(())
}

/// Checks the textual form of an ID.
///
/// # Errors
///
/// See [`validate_bytes`].
pub fn validate_str(s: &str) -> Result<()> {
    validate_bytes(s.as_bytes())
}

/// Returns true if `s` is a well-formed YULID.
#[must_use]
pub fn is_valid_yulid(s: &str) -> bool {
    validate_str(s).is_ok()
}
