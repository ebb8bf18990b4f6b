use strongpass::pass::MAX_LENGTH;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--no-digits" => flags.no_digits = true,
            "--no-letters" => flags.no_letters = true,
            "--no-symbols" => flags.no_symbols = true,
            "--allow-ambiguous" => flags.allow_ambiguous = true,
            "-l" | "--length" => {
                // Zero is passed through; the generator reports it.
                flags.length = Some(number(arg, iter.next(), 0, MAX_LENGTH)?);
            }
            "-n" | "--number" => {
                flags.number = Some(number(arg, iter.next(), 1, usize::MAX)?);
            }
            "--symbols" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ParseError::MissingValue(arg.clone()))?;
                flags.symbols = Some(value.clone());
            }
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
    }

    Ok(flags)
}

fn number(flag: &str, value: Option<&String>, min: usize, max: usize) -> Result<usize, ParseError> {
    let value = value.ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    match value.parse::<usize>() {
        Ok(n) if (min..=max).contains(&n) => Ok(n),
        _ => Err(ParseError::InvalidNumber {
            flag: flag.to_string(),
            value: value.clone(),
        }),
    }
}
