//! Flag mode: parse arguments, generate, print.

mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;
mod quiet;

pub use context::{Context, Exit, load_saved};
pub use flags::CliFlags;
pub use help::print_help;
pub use parse::{ParseError, parse};

/// Exit status for unusable arguments.
pub const USAGE: i32 = 2;

/// Run flag mode and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            prompts::error("Run `strongpass --help` for usage.");
            return USAGE;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Exit::Done) => 0,
        Err(Exit::Failed(code)) => code,
    }
}
