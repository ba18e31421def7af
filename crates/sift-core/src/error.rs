//! Error type for the relevance engine

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A result count below zero was requested
    #[error("result count must not be negative, got {0}")]
    NegativeCount(i64),

    /// An IDF lookup missed; the table was computed over a different corpus
    #[error("no IDF weight for `{word}`; IDF table does not cover the scored corpus")]
    MissingIdf { word: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convert a signed, user-supplied result count into a ranking limit.
///
/// Zero is valid and yields empty rankings. Counts beyond `usize::MAX`
/// saturate, which is equivalent to "everything".
pub fn result_count(n: i64) -> Result<usize> {
    if n < 0 {
        return Err(Error::NegativeCount(n));
    }
    Ok(usize::try_from(n).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_count_accepts_zero_and_positive() {
        assert_eq!(result_count(0), Ok(0));
        assert_eq!(result_count(5), Ok(5));
    }

    #[test]
    fn test_result_count_rejects_negative() {
        assert_eq!(result_count(-1), Err(Error::NegativeCount(-1)));
    }

    #[test]
    fn test_error_messages() {
        let err = Error::MissingIdf {
            word: "cat".to_string(),
        };
        assert!(err.to_string().contains("`cat`"));
        assert_eq!(
            Error::NegativeCount(-3).to_string(),
            "result count must not be negative, got -3"
        );
    }
}
