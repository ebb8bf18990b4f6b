//! Line input for prompts.
//!
//! On a TTY the line is edited in raw mode so Esc and Ctrl+C can cancel
//! cleanly; otherwise lines are read from stdin as-is.

use std::io::{self, BufRead};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush};

/// Read one answer. `None` means the user cancelled or input ended.
pub fn read_line(prompt: &str) -> Option<String> {
    match RawModeGuard::on_tty() {
        Some(guard) => read_edited(prompt, guard),
        None => read_plain(prompt),
    }
}

fn read_plain(prompt: &str) -> Option<String> {
    print!("{prompt}: ");
    flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn read_edited(prompt: &str, mut guard: RawModeGuard) -> Option<String> {
    let mut input: Vec<char> = Vec::new();
    // 0-based insertion point within `input`.
    let mut cursor = 0usize;
    let mut drawn = 0usize;
    let mut cancelled = false;

    print!("{prompt}: ");
    flush();

    loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => {
                cancelled = true;
                break;
            }
        };

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') | KeyCode::Char('q') if ctrl => {
                cancelled = true;
                break;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if cursor > 0 {
                    cursor -= 1;
                    input.remove(cursor);
                }
            }
            KeyCode::Delete => {
                if cursor < input.len() {
                    input.remove(cursor);
                }
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => cursor = (cursor + 1).min(input.len()),
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let line: String = input.iter().collect();
        print!("\r{prompt}: {}", " ".repeat(drawn + 1));
        print!("\r{prompt}: {line}");
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        drawn = input.len();
    }

    guard.release();
    println!();

    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}
