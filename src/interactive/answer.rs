//! Parsing of prompt answers.

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntAnswerError {
    #[error("Please enter a number \u{2265} {0}.")]
    TooSmall(usize),
    #[error("Please enter a number \u{2264} {0}.")]
    TooLarge(usize),
    #[error("Please enter a whole number.")]
    NotANumber,
}

/// Blank takes `default`; anything else must be a whole number in `min..=max`.
pub fn parse_int(raw: &str, default: usize, min: usize, max: usize) -> Result<usize, IntAnswerError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    let value: i64 = raw.parse().map_err(|_| IntAnswerError::NotANumber)?;
    match usize::try_from(value) {
        Ok(n) if n > max => Err(IntAnswerError::TooLarge(max)),
        Ok(n) if n >= min => Ok(n),
        _ => Err(IntAnswerError::TooSmall(min)),
    }
}

/// Blank takes `default`; `y`/`yes`/`n`/`no` in any case. `None` means re-ask.
pub fn parse_bool(raw: &str, default: bool) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// `Y/n` or `y/N` depending on the default.
pub fn bool_suffix(default: bool) -> &'static str {
    if default { "Y/n" } else { "y/N" }
}
