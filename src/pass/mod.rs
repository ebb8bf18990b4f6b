//! Password generation and output.

pub mod charset;
mod error;
mod generate;
mod options;
pub mod output;
mod password;

pub use charset::{Alphabet, CharClass, Pool, Pools};
pub use error::ConfigurationError;
pub use generate::{Batch, batch, batch_with, fill, generate, generate_batch, generate_with};
pub use options::{DEFAULT_LENGTH, MAX_LENGTH, Options};
pub use password::Password;
