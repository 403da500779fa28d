pub mod alphabet;
pub mod config;
pub mod error;
mod generate;
pub mod prefix;
pub mod validate;
pub mod yulid;

pub use alphabet::{
    ALPHABET, CAPACITY, MAX_LEN, MAX_SUFFIX_LEN, MIN_LEN, MIN_SUFFIX_LEN, PREFIX_LEN, SEPARATOR,
    SEPARATOR_LEN, is_alphanumeric,
};
pub use config::PrefixConfig;
pub use error::{Result, YulidError};
pub use prefix::{derive_prefix, derive_prefix_with};
pub use validate::{is_valid_yulid, validate, validate_bytes, validate_str};
pub use yulid::{Yulid, render_bytes};
