use std::env;
use std::process;

mod cli;
mod exits;
mod interactive;
mod logging;
mod terminal;

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();
    logging::init();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 => interactive::run(),
        _ => cli::run(args),
    };
    process::exit(code);
}
