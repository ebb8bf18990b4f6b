//! Settings file persistence.
//!
//! A single line of comma-separated fields:
//! `length,count,digits,letters,symbols,custom_symbols,exclude_ambiguous`.
//! Commas and pipes inside the symbol field are escaped with `|`. An empty
//! symbol field means the curated default set.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

const FIELDS: usize = 7;

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let options = &settings.options;
    let symbols = options
        .custom_symbols
        .as_deref()
        .map(escape)
        .unwrap_or_default();

    let data = format!(
        "{},{},{},{},{},{},{}\n",
        options.length,
        settings.number_of_passwords,
        options.digits,
        options.letters,
        options.symbols,
        symbols,
        options.exclude_ambiguous,
    );

    file.write_all(data.as_bytes())
}

pub fn load(path: &Path) -> io::Result<Settings> {
    let mut settings = Settings::default();
    if !path.exists() {
        return Ok(settings);
    }

    let mut reader = BufReader::new(OpenOptions::new().read(true).open(path)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Ok(settings);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{}: expected {FIELDS} fields, found {}",
                path.display(),
                parts.len()
            ),
        ));
    }

    let options = &mut settings.options;
    options.length = parts[0].parse().unwrap_or(options.length);
    // At least one password per run, whatever the file says.
    settings.number_of_passwords = parts[1]
        .parse::<usize>()
        .map(|n| n.max(1))
        .unwrap_or(settings.number_of_passwords);
    options.digits = parts[2].parse().unwrap_or(options.digits);
    options.letters = parts[3].parse().unwrap_or(options.letters);
    options.symbols = parts[4].parse().unwrap_or(options.symbols);
    options.custom_symbols = (!parts[5].is_empty()).then(|| parts[5].clone());
    options.exclude_ambiguous = parts[6].parse().unwrap_or(options.exclude_ambiguous);

    Ok(settings)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
