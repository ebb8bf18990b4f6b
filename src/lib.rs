//! Password generation with guaranteed character-class coverage.
//!
//! The core is [`pass::generate`]: it builds one pool per enabled class, draws
//! one mandatory character from each, fills the rest from the combined pool and
//! shuffles the result. Every random decision goes through [`entropy`], which
//! only accepts cryptographically secure sources.

pub mod entropy;
pub mod pass;
pub mod settings;

pub use pass::{ConfigurationError, Options, Password, generate};
pub use settings::Settings;
