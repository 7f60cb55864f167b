use crate::constants::{exit_codes, verbosity, PARTIAL_ARG_SEPARATOR};
use crate::renderer::EngineKind;
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// A partial given on the command line as `NAME=PATH`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialArg {
    pub name: String,
    pub path: PathBuf,
}

impl std::str::FromStr for PartialArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(PARTIAL_ARG_SEPARATOR) {
            Some((name, path)) if !name.is_empty() && !path.is_empty() => {
                Ok(Self { name: name.to_string(), path: PathBuf::from(path) })
            }
            _ => Err(format!("expected NAME=PATH, got '{s}'")),
        }
    }
}

/// CLI arguments for stache.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Template file, or `-` to read it from stdin.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// View data as a JSON string.
    #[arg(long, conflicts_with = "view_file")]
    pub view: Option<String>,

    /// File holding the view data as JSON, or `-` for stdin.
    #[arg(long = "view-file")]
    pub view_file: Option<String>,

    /// Partial template as `NAME=PATH` (repeatable).
    #[arg(short, long = "partial", value_name = "NAME=PATH")]
    pub partials: Vec<PartialArg>,

    /// Read partial files only when the template references them.
    #[arg(long)]
    pub lazy: bool,

    /// Rendering engine; overrides the settings file.
    #[arg(short, long, value_enum)]
    pub engine: Option<EngineKind>,

    /// Settings file (JSON or YAML). Defaults to `stache.{json,yaml,yml}`
    /// next to the template, or in the current directory for stdin.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the rendered output here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
