//! Persisted defaults.
//!
//! Only generation preferences are stored; passwords never are.

mod file;

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::pass::Options;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: Options,
    pub number_of_passwords: usize,
}

impl Settings {
    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> io::Result<Self> {
        Self::load_from(&default_path())
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        file::load(path)
    }

    pub fn save(&self) -> io::Result<()> {
        self.save_to(&default_path())
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        file::save(self, path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            options: Options::default(),
            number_of_passwords: 1,
        }
    }
}

/// `$HOME/.config/strongpass/settings`, relative to `.` when `HOME` is unset.
pub fn default_path() -> PathBuf {
    let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
    let mut path = PathBuf::from(home);
    path.push(".config");
    path.push("strongpass");
    path.push("settings");
    path
}
