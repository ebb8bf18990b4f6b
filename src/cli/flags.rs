#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub saved: bool,
    pub save: bool,
    pub no_digits: bool,
    pub no_letters: bool,
    pub no_symbols: bool,
    pub allow_ambiguous: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub symbols: Option<String>,
}
