//! Constants used throughout stache

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["stache.json", "stache.yaml", "stache.yml"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Separator between a partial name and its file in `--partial NAME=PATH`
pub const PARTIAL_ARG_SEPARATOR: char = '=';

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
