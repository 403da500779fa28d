#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YulidError {
    #[error("input should be exactly four alphanumeric characters: '{input}'")]
    InvalidInput { input: String },

    #[error("YULID has an invalid length: {len}")]
    InvalidLength { len: usize },

    #[error("YULID has an invalid prefix")]
    InvalidPrefix,

    #[error("YULID separator is invalid")]
    InvalidSeparator,

    #[error("YULID random part contains invalid characters")]
    InvalidSuffix,
}

impl YulidError {
    /// Returns true if this error came from a structural check of an ID.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. }
                | Self::InvalidPrefix
                | Self::InvalidSeparator
                | Self::InvalidSuffix
        )
    }

    /// Returns true if a caller-supplied prefix or name was rejected.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    pub(crate) fn invalid_input(input: &str) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, YulidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let error = YulidError::invalid_input("ab");
        assert_eq!(
            error.to_string(),
            "input should be exactly four alphanumeric characters: 'ab'"
        );
    }

    #[test]
    fn test_invalid_length_display() {
        let error = YulidError::InvalidLength { len: 12 };
        assert_eq!(error.to_string(), "YULID has an invalid length: 12");
    }

    #[test]
    fn test_structural_error_display() {
        assert_eq!(
            YulidError::InvalidPrefix.to_string(),
            "YULID has an invalid prefix"
        );
        assert_eq!(
            YulidError::InvalidSeparator.to_string(),
            "YULID separator is invalid"
        );
        assert_eq!(
            YulidError::InvalidSuffix.to_string(),
            "YULID random part contains invalid characters"
        );
    }

    #[test]
    fn test_is_validation_error() {
        assert!(YulidError::InvalidLength { len: 0 }.is_validation_error());
        assert!(YulidError::InvalidPrefix.is_validation_error());
        assert!(YulidError::InvalidSeparator.is_validation_error());
        assert!(YulidError::InvalidSuffix.is_validation_error());
        assert!(!YulidError::invalid_input("x").is_validation_error());
    }

    #[test]
    fn test_is_input_error() {
        assert!(YulidError::invalid_input("x").is_input_error());
        assert!(!YulidError::InvalidPrefix.is_input_error());
    }

    #[test]
    fn test_error_debug() {
        let error = YulidError::InvalidSeparator;
        assert!(format!("{error:?}").contains("InvalidSeparator"));
    }

    #[test]
    fn test_error_clone_and_equality() {
        let error1 = YulidError::invalid_input("j0hn");
        let error2 = error1.clone();
        assert_eq!(error1, error2);
        assert_ne!(error1, YulidError::invalid_input("jane"));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<()> = Err(YulidError::InvalidSuffix);
        assert_eq!(result, Err(YulidError::InvalidSuffix));
    }
}
