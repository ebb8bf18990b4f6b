use strongpass::pass::{DEFAULT_LENGTH, MAX_LENGTH, charset};

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("strongpass");
    box_line_center("Password generator with guaranteed class coverage");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments and answer the");
    box_line("     prompts. Saved defaults are offered as answers.");
    box_line("  2) Flags: pass options directly, e.g. `-l 20 -n 5`.");
    box_line("");
    box_line("USAGE:");
    box_line("  strongpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password (default: {DEFAULT_LENGTH}, max: {MAX_LENGTH})"),
    );
    box_opt("  -n, --number <N>", "How many passwords to print (default: 1)");
    box_opt("      --no-digits", "Leave out digits");
    box_opt("      --no-letters", "Leave out letters");
    box_opt("      --no-symbols", "Leave out symbols");
    box_opt("      --symbols <CHARS>", "Replace the symbol set; whitespace is ignored");
    box_opt(
        "      --allow-ambiguous",
        &format!("Keep look-alike characters ({})", charset::AMBIGUOUS),
    );
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved defaults");
    box_opt("      --save", "Save the resulting options as defaults");
    box_line("");
    box_line(" Other:");
    box_opt("  -q, --quiet", "Suppress warnings and status lines");
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_line("");
    box_line(&format!("Symbols: {}", charset::DEFAULT_SYMBOLS));
    box_line("Every selected class appears at least once per password.");
    box_bottom();
}
