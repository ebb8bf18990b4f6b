use std::fmt;

use zeroize::Zeroize;

/// A generated password. The buffer is wiped on drop and `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Take ownership of generated characters, wiping the source buffer.
    pub(crate) fn from_chars(mut chars: Vec<char>) -> Self {
        // Exact capacity so the string never reallocates and leaves a copy behind.
        let bytes = chars.iter().map(|c| c.len_utf8()).sum();
        let mut s = String::with_capacity(bytes);
        s.extend(chars.iter());
        chars.zeroize();
        Password(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let pw = Password::from_chars("hunter2".chars().collect());
        assert_eq!(format!("{pw:?}"), "Password(<redacted>)");
        assert_eq!(pw.as_str(), "hunter2");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let pw = Password::from_chars("a€b".chars().collect());
        assert_eq!(pw.len(), 3);
        assert_eq!(pw.as_str().len(), 5);
    }
}
