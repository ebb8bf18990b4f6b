//! CLI context - bundles settings and flags.

use std::io;

use strongpass::pass::{self, output};
use strongpass::settings::{self, Settings};
use strongpass::entropy;
use tracing::{debug, info, warn};

use super::{CliFlags, ParseError, parse, print_help, prompts, quiet};

/// Why `run` stopped before or after generating.
pub enum Exit {
    /// Nothing left to do; not an error.
    Done,
    Failed(i32),
}

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(args: Vec<String>) -> Result<Self, ParseError> {
        let flags = parse(&args)?;
        quiet::set(flags.quiet);

        let settings = if flags.saved {
            load_saved()
        } else {
            Settings::default()
        };

        Ok(Self { settings, flags })
    }

    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        apply_flags(&self.flags, &mut self.settings);
        self.handle_save();
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("strongpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        let path = settings::default_path();
        match self.settings.save_to(&path) {
            Ok(()) => {
                info!(path = %path.display(), "saved defaults");
                prompts::settings_saved(&path.display().to_string());
            }
            Err(e) => {
                warn!(error = %e, "failed to save defaults");
                prompts::warn(&format!("Failed to save settings: {e}"));
            }
        }
    }

    fn generate_output(&self) -> Result<(), Exit> {
        let options = &self.settings.options;
        let count = self.settings.number_of_passwords;
        debug!(
            length = options.length,
            count,
            digits = options.digits,
            letters = options.letters,
            symbols = options.symbols,
            custom_symbols = options.custom_symbols.is_some(),
            exclude_ambiguous = options.exclude_ambiguous,
            source = entropy::source_name(),
            "generating passwords"
        );

        let passwords = pass::batch(options, count).map_err(|e| {
            prompts::error(&format!("Error: {e}"));
            Exit::Failed(1)
        })?;

        match output::write_lines(io::stdout().lock(), passwords) {
            Ok(()) => Ok(()),
            // Reader went away (e.g. `| head`); nothing more to say.
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            Err(e) => {
                prompts::error(&format!("Error: failed to write passwords: {e}"));
                Err(Exit::Failed(1))
            }
        }
    }
}

/// Saved defaults, or the built-in ones with a warning if they can't be read.
pub fn load_saved() -> Settings {
    Settings::load().unwrap_or_else(|e| {
        warn!(error = %e, "unreadable settings, using defaults");
        prompts::warn(&format!("Failed to load settings: {e}"));
        Settings::default()
    })
}

/// Apply explicit flags on top of `settings`.
pub fn apply_flags(flags: &CliFlags, settings: &mut Settings) {
    if let Some(num) = flags.number {
        settings.number_of_passwords = num;
    }

    let options = &mut settings.options;
    if let Some(len) = flags.length {
        options.length = len;
    }
    if let Some(ref symbols) = flags.symbols {
        options.symbols = true;
        options.custom_symbols = Some(symbols.clone());
    }
    if flags.no_digits {
        options.digits = false;
    }
    if flags.no_letters {
        options.letters = false;
    }
    if flags.no_symbols {
        options.symbols = false;
    }
    if flags.allow_ambiguous {
        options.exclude_ambiguous = false;
    }
}
