use super::CharClass;

/// Why a configuration cannot produce a password.
///
/// Every variant is detected before any randomness is consumed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Select at least one character set.")]
    NoClassSelected,

    #[error("Symbol set is empty after removing whitespace.")]
    EmptySymbolSet,

    /// Only reachable with a custom [`Alphabet`](super::Alphabet) whose digit
    /// or letter source filters down to nothing.
    #[error("The {0} set is empty after filtering.")]
    EmptyPool(CharClass),

    #[error("Length must be at least {required} to include one of each selected set.")]
    LengthTooShort { length: usize, required: usize },

    #[error("Length must be positive.")]
    NonPositiveLength,

    #[error("Length must be at most {max}.")]
    LengthTooLong { length: usize, max: usize },
}
