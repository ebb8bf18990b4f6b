//! Character pool building.
//!
//! One [`Pool`] per enabled class, filtered, in the fixed order digits,
//! letters, symbols. The order has no effect on the output distribution since
//! the generated characters are shuffled afterwards.

use std::fmt;

use super::{ConfigurationError, Options};

pub const DIGITS: &str = "0123456789";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// No whitespace, no quotes or backticks (some sites reject them).
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?/";
/// Characters easily confused with one another in common fonts.
pub const AMBIGUOUS: &str = "Il1O0o";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digits,
    Letters,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 3] = [CharClass::Digits, CharClass::Letters, CharClass::Symbols];
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CharClass::Digits => "digit",
            CharClass::Letters => "letter",
            CharClass::Symbols => "symbol",
        })
    }
}

/// The fixed source sets the pool builder draws from.
///
/// `Alphabet::default()` uses [`DIGITS`], [`LETTERS`], [`DEFAULT_SYMBOLS`] and
/// [`AMBIGUOUS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    pub digits: &'static str,
    pub letters: &'static str,
    pub symbols: &'static str,
    pub ambiguous: &'static str,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            digits: DIGITS,
            letters: LETTERS,
            symbols: DEFAULT_SYMBOLS,
            ambiguous: AMBIGUOUS,
        }
    }
}

/// Filtered characters for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    class: CharClass,
    chars: Vec<char>,
}

impl Pool {
    pub fn class(&self) -> CharClass {
        self.class
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

/// Active pools plus their concatenation. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pools {
    pools: Vec<Pool>,
    combined: Vec<char>,
}

impl Pools {
    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn combined(&self) -> &[char] {
        &self.combined
    }

    /// Number of active classes, i.e. mandatory slots per password.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn get(&self, class: CharClass) -> Option<&Pool> {
        self.pools.iter().find(|p| p.class == class)
    }
}

/// Build the active pools for `options`.
///
/// Whitespace is always stripped, duplicates keep their first occurrence, and
/// ambiguous characters are removed from every class when requested. Length is
/// not looked at here.
pub fn build(options: &Options, alphabet: &Alphabet) -> Result<Pools, ConfigurationError> {
    let mut pools = Vec::with_capacity(CharClass::ALL.len());

    for class in CharClass::ALL {
        if !options.includes(class) {
            continue;
        }

        let source = match class {
            CharClass::Digits => alphabet.digits,
            CharClass::Letters => alphabet.letters,
            CharClass::Symbols => options.custom_symbols.as_deref().unwrap_or(alphabet.symbols),
        };
        let ambiguous = options.exclude_ambiguous.then_some(alphabet.ambiguous);
        let chars = filter(source, ambiguous);

        if chars.is_empty() {
            return Err(match class {
                CharClass::Symbols => ConfigurationError::EmptySymbolSet,
                other => ConfigurationError::EmptyPool(other),
            });
        }
        pools.push(Pool { class, chars });
    }

    if pools.is_empty() {
        return Err(ConfigurationError::NoClassSelected);
    }

    let combined = pools.iter().flat_map(|p| p.chars.iter().copied()).collect();
    Ok(Pools { pools, combined })
}

fn filter(source: &str, ambiguous: Option<&str>) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(source.len());
    for c in source.chars() {
        if c.is_whitespace() || chars.contains(&c) {
            continue;
        }
        if ambiguous.is_some_and(|set| set.contains(c)) {
            continue;
        }
        chars.push(c);
    }
    chars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharClass) -> Options {
        Options {
            digits: class == CharClass::Digits,
            letters: class == CharClass::Letters,
            symbols: class == CharClass::Symbols,
            ..Options::default()
        }
    }

    #[test]
    fn default_pool_sizes() {
        let pools = build(&Options::default(), &Alphabet::default()).unwrap();
        let sizes: Vec<(CharClass, usize)> =
            pools.pools().iter().map(|p| (p.class(), p.len())).collect();
        assert_eq!(
            sizes,
            vec![
                (CharClass::Digits, 8),
                (CharClass::Letters, 48),
                (CharClass::Symbols, 24),
            ]
        );
        assert_eq!(pools.combined().len(), 80);
    }

    #[test]
    fn ambiguous_characters_removed_from_every_pool() {
        let options = Options {
            custom_symbols: Some("O!0?".into()),
            ..Options::default()
        };
        let pools = build(&options, &Alphabet::default()).unwrap();
        for c in AMBIGUOUS.chars() {
            assert!(!pools.combined().contains(&c), "{c} survived filtering");
        }
        assert_eq!(pools.get(CharClass::Symbols).unwrap().chars(), &['!', '?']);
    }

    #[test]
    fn ambiguous_characters_kept_when_allowed() {
        let options = Options {
            exclude_ambiguous: false,
            ..Options::default()
        };
        let pools = build(&options, &Alphabet::default()).unwrap();
        assert_eq!(pools.get(CharClass::Digits).unwrap().len(), 10);
        assert_eq!(pools.get(CharClass::Letters).unwrap().len(), 52);
    }

    #[test]
    fn custom_symbols_lose_whitespace_and_duplicates() {
        let options = Options {
            custom_symbols: Some(" #\t# $\n%".into()),
            ..only(CharClass::Symbols)
        };
        let pools = build(&options, &Alphabet::default()).unwrap();
        assert_eq!(pools.combined(), &['#', '$', '%']);
    }

    #[test]
    fn whitespace_only_symbols_are_rejected() {
        let options = Options {
            custom_symbols: Some(" \t\r\n ".into()),
            ..Options::default()
        };
        assert_eq!(
            build(&options, &Alphabet::default()),
            Err(ConfigurationError::EmptySymbolSet)
        );
    }

    #[test]
    fn symbols_that_are_all_ambiguous_are_rejected() {
        let options = Options {
            custom_symbols: Some("0O".into()),
            ..only(CharClass::Symbols)
        };
        assert_eq!(
            build(&options, &Alphabet::default()),
            Err(ConfigurationError::EmptySymbolSet)
        );
    }

    #[test]
    fn disabled_symbols_ignore_empty_custom_set() {
        let options = Options {
            symbols: false,
            custom_symbols: Some("   ".into()),
            ..Options::default()
        };
        let pools = build(&options, &Alphabet::default()).unwrap();
        assert_eq!(pools.len(), 2);
        assert!(pools.get(CharClass::Symbols).is_none());
    }

    #[test]
    fn no_class_selected() {
        let options = Options {
            digits: false,
            letters: false,
            symbols: false,
            ..Options::default()
        };
        assert_eq!(
            build(&options, &Alphabet::default()),
            Err(ConfigurationError::NoClassSelected)
        );
    }

    #[test]
    fn custom_alphabet_is_honoured() {
        let alphabet = Alphabet {
            digits: "01",
            letters: "ab",
            symbols: "!",
            ambiguous: "",
        };
        let pools = build(&Options::default(), &alphabet).unwrap();
        assert_eq!(pools.combined(), &['0', '1', 'a', 'b', '!']);
    }

    #[test]
    fn digit_pool_filtered_to_nothing() {
        let alphabet = Alphabet {
            digits: "10",
            ..Alphabet::default()
        };
        assert_eq!(
            build(&only(CharClass::Digits), &alphabet),
            Err(ConfigurationError::EmptyPool(CharClass::Digits))
        );
    }
}
