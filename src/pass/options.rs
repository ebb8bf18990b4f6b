//! Generation options.

use super::CharClass;

pub const DEFAULT_LENGTH: usize = 16;

/// Longest password the generator will build. Longer requests fail with
/// [`ConfigurationError::LengthTooLong`](super::ConfigurationError::LengthTooLong)
/// before anything is allocated.
pub const MAX_LENGTH: usize = 4096;

/// What to generate. Built fresh by the caller for each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub length: usize,
    pub digits: bool,
    pub letters: bool,
    pub symbols: bool,
    /// Replaces the curated symbol set when present. Whitespace is stripped.
    pub custom_symbols: Option<String>,
    /// Drop `I l 1 O 0 o` from every pool.
    pub exclude_ambiguous: bool,
}

impl Options {
    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Digits => self.digits,
            CharClass::Letters => self.letters,
            CharClass::Symbols => self.symbols,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            digits: true,
            letters: true,
            symbols: true,
            custom_symbols: None,
            exclude_ambiguous: true,
        }
    }
}
