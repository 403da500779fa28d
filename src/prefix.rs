//! Deriving an ID prefix from a person's name.
//!
//! The prefix is the first and last letter of the first name followed by the
//! first and last letter of the last name, so "John Doe" becomes `JNDE`.

use crate::alphabet::{PREFIX_LEN, is_alphanumeric};
use crate::config::PrefixConfig;
use crate::error::{Result, YulidError};

/// Derives a prefix using the default [`PrefixConfig`].
///
/// # Errors
///
/// Returns `InvalidInput` if `name` contains no usable characters.
///
/// # Examples
///
/// ```
/// use yulid::derive_prefix;
///
/// assert_eq!(derive_prefix("John Doe").unwrap(), "JNDE");
/// assert_eq!(derive_prefix("Mary Ann Smith").unwrap(), "MYSH");
/// assert_eq!(derive_prefix("Cher").unwrap(), "CHER");
/// assert_eq!(derive_prefix("Bo").unwrap(), "BOXX");
/// ```
pub fn derive_prefix(name: &str) -> Result<String> {
    derive_prefix_with(name, &PrefixConfig::new())
}

/// Derives a four character prefix from `name`.
///
/// Words are split on whitespace and hyphens. Letters are uppercased and any
/// character outside `A-Z0-9` is dropped. With two or more words the result is
/// first+last character of the first word, then first+last of the last word.
/// A single word contributes its first four characters, padded with
/// `config.fill`.
///
/// # Errors
///
/// Returns `InvalidInput` if no word survives filtering, or if `config.fill`
/// is outside the alphabet.
pub fn derive_prefix_with(name: &str, config: &PrefixConfig) -> Result<String> {
    let fill = u8::try_from(config.fill)
        .ok()
        .filter(|&b| is_alphanumeric(b))
        .ok_or_else(|| YulidError::invalid_input(name))?;

    let words: Vec<Vec<u8>> = name
        .split(|c: char| c.is_whitespace() || c == '-')
        .map(|word| {
            word.bytes()
                .map(|b| b.to_ascii_uppercase())
                .filter(|&b| is_alphanumeric(b))
                .collect::<Vec<u8>>()
        })
        .filter(|word| !word.is_empty())
        .collect();

    let prefix: Vec<u8> = match words.as_slice() {
        [] => return Err(YulidError::invalid_input(name)),
        [only] => only
            .iter()
            .copied()
            .chain(std::iter::repeat(fill))
            .take(PREFIX_LEN)
            .collect(),
        [first, .., last] => vec![
            first[0],
            first[first.len() - 1],
            last[0],
            last[last.len() - 1],
        ],
    };

    // every byte passed is_alphanumeric, so this is ASCII
    Ok(prefix.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Yulid;
    use proptest::prelude::*;

    #[test]
    fn test_two_words() {
        assert_eq!(derive_prefix("John Doe").unwrap(), "JNDE");
        assert_eq!(derive_prefix("jane smith").unwrap(), "JESH");
    }

    #[test]
    fn test_middle_names_ignored() {
        assert_eq!(derive_prefix("Mary Ann Smith").unwrap(), "MYSH");
        assert_eq!(derive_prefix("A B C D").unwrap(), "AADD");
    }

    #[test]
    fn test_single_letter_words() {
        assert_eq!(derive_prefix("J Doe").unwrap(), "JJDE");
        assert_eq!(derive_prefix("John D").unwrap(), "JNDD");
    }

    #[test]
    fn test_hyphen_and_extra_whitespace() {
        assert_eq!(derive_prefix("  Anne-Marie\tLee ").unwrap(), "AELE");
        assert_eq!(derive_prefix("Jean-Luc").unwrap(), "JNLC");
    }

    #[test]
    fn test_punctuation_dropped() {
        assert_eq!(derive_prefix("O'Brien, Pat").unwrap(), "ONPT");
        assert_eq!(derive_prefix("Dr. J. Doe").unwrap(), "DRDE");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(derive_prefix("R2 D2").unwrap(), "R2D2");
    }

    #[test]
    fn test_non_ascii_letters_dropped() {
        assert_eq!(derive_prefix("José Núñez").unwrap(), "JSNZ");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(derive_prefix("Cher").unwrap(), "CHER");
        assert_eq!(derive_prefix("Madonna").unwrap(), "MADO");
    }

    #[test]
    fn test_single_word_padded() {
        assert_eq!(derive_prefix("Bo").unwrap(), "BOXX");
        assert_eq!(derive_prefix("Q").unwrap(), "QXXX");
    }

    #[test]
    fn test_custom_fill() {
        let config = PrefixConfig::new().fill('0');
        assert_eq!(derive_prefix_with("Bo", &config).unwrap(), "BO00");
    }

    #[test]
    fn test_invalid_fill() {
        for fill in ['x', '-', 'É'] {
            let config = PrefixConfig::new().fill(fill);
            assert_eq!(
                derive_prefix_with("Bo", &config),
                Err(YulidError::InvalidInput {
                    input: "Bo".to_string()
                })
            );
        }
    }

    #[test]
    fn test_unusable_names() {
        for name in ["", "   ", "-", "!!! ???", "日本"] {
            let err = derive_prefix(name).unwrap_err();
            assert!(err.is_input_error(), "{name:?} should be rejected");
        }
    }

    proptest! {
        #[test]
        fn prop_derived_prefix_is_accepted(name in "\\PC{0,40}") {
            if let Ok(prefix) = derive_prefix(&name) {
                prop_assert_eq!(prefix.len(), PREFIX_LEN);
                prop_assert!(Yulid::new(&prefix).is_ok());
            }
        }

        #[test]
        fn prop_ascii_word_always_derives(name in "[A-Za-z]{1,12}( [A-Za-z]{1,12}){0,3}") {
            prop_assert!(derive_prefix(&name).is_ok());
        }
    }
}
