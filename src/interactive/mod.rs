//! Interactive prompt mode.
//!
//! Asks for each option in turn, offering saved defaults, then prints the
//! passwords. Nothing is written anywhere but stdout.

mod answer;
mod input;

use std::io;

use strongpass::pass::{self, MAX_LENGTH, Options, charset, output};
use tracing::debug;

use crate::cli::{load_saved, prompts};
use crate::exits::ABORTED;
use crate::terminal::{BOLD, RESET, box_bottom, box_line_center, box_top};

use answer::{bool_suffix, parse_bool, parse_int};

/// Shortest length offered interactively.
const MIN_LENGTH: usize = 4;

/// The user backed out of a prompt.
struct Cancelled;

/// Run interactive mode and return the process exit code.
pub fn run() -> i32 {
    box_top("strongpass");
    box_line_center("Answer each prompt or press Enter for the default");
    box_bottom();

    let saved = load_saved();
    let (options, count) = match ask(&saved.options, saved.number_of_passwords) {
        Ok(Some(answers)) => answers,
        Ok(None) => {
            prompts::error("Error: symbols cannot be empty when symbols are enabled.");
            return 1;
        }
        Err(Cancelled) => {
            println!("\nAborted.");
            return ABORTED;
        }
    };

    debug!(
        length = options.length,
        count,
        digits = options.digits,
        letters = options.letters,
        symbols = options.symbols,
        custom_symbols = options.custom_symbols.is_some(),
        exclude_ambiguous = options.exclude_ambiguous,
        "generating passwords"
    );

    let passwords = match pass::batch(&options, count) {
        Ok(passwords) => passwords,
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            return 1;
        }
    };

    if let Err(e) = output::write_lines(io::stdout().lock(), passwords)
        && e.kind() != io::ErrorKind::BrokenPipe
    {
        prompts::error(&format!("Error: failed to write passwords: {e}"));
        return 1;
    }

    println!("\n{BOLD}Done.{RESET} (Nothing was stored.)");
    0
}

/// Walk through every prompt. `Ok(None)` means an empty custom symbol set was
/// entered.
fn ask(defaults: &Options, default_count: usize) -> Result<Option<(Options, usize)>, Cancelled> {
    let length = prompt_int(
        "Password length",
        defaults.length.clamp(MIN_LENGTH, MAX_LENGTH),
        MIN_LENGTH,
        MAX_LENGTH,
    )?;
    let count = prompt_int("How many passwords", default_count.max(1), 1, usize::MAX)?;

    let digits = prompt_bool("Include digits?", defaults.digits)?;
    let letters = prompt_bool("Include letters (a-z, A-Z)?", defaults.letters)?;
    let symbols = prompt_bool("Include symbols?", defaults.symbols)?;

    let mut custom_symbols = None;
    if symbols {
        let current = defaults
            .custom_symbols
            .as_deref()
            .unwrap_or(charset::DEFAULT_SYMBOLS);
        let label = format!("Use custom symbols? (default: {current})");
        if prompt_bool(&label, false)? {
            let raw = input::read_line("Enter symbols (no spaces)").ok_or(Cancelled)?;
            let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            if cleaned.is_empty() {
                return Ok(None);
            }
            custom_symbols = Some(cleaned);
        } else {
            custom_symbols = defaults.custom_symbols.clone();
        }
    }

    let exclude_ambiguous = prompt_bool(
        &format!(
            "Exclude ambiguous characters ({})?",
            spaced(charset::AMBIGUOUS)
        ),
        defaults.exclude_ambiguous,
    )?;

    let options = Options {
        length,
        digits,
        letters,
        symbols,
        custom_symbols,
        exclude_ambiguous,
    };
    Ok(Some((options, count)))
}

fn prompt_int(label: &str, default: usize, min: usize, max: usize) -> Result<usize, Cancelled> {
    loop {
        let raw = input::read_line(&format!("{label} [{default}]")).ok_or(Cancelled)?;
        match parse_int(&raw, default, min, max) {
            Ok(n) => return Ok(n),
            Err(e) => println!("{e}"),
        }
    }
}

fn prompt_bool(label: &str, default: bool) -> Result<bool, Cancelled> {
    loop {
        let raw =
            input::read_line(&format!("{label} ({})", bool_suffix(default))).ok_or(Cancelled)?;
        match parse_bool(&raw, default) {
            Some(answer) => return Ok(answer),
            None => println!("Please answer y or n."),
        }
    }
}

/// "Il1" -> "I, l, 1"
fn spaced(chars: &str) -> String {
    chars
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(", ")
}
