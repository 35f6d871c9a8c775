//! Library half of the `ccdrive` CLI.
//!
//! Argument handling and command wiring live here so they can be tested
//! without spawning the binary. All build logic lives in `ccdrive-core`.

use ccdrive_core::config::DEFAULT_OUTPUT_NAME;
use clap::Parser;

pub mod commands;
pub mod logger;

/// Compile every C source under `src/`, link into `bin/`, optionally run.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "ccdrive",
    about = "Minimal C build driver",
    long_about = None,
    args_override_self = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Run the program after a successful build (a bare `run` works too).
    #[arg(long)]
    pub run: bool,

    /// File name of the linked program inside `bin/`.
    #[arg(
        long,
        value_name = "NAME",
        default_value = DEFAULT_OUTPUT_NAME,
        allow_hyphen_values = true
    )]
    pub out: String,
}

impl Cli {
    /// Parse after dropping everything the driver does not recognize.
    pub fn parse_lenient<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::parse_from(normalize_args(args))
    }
}

/// Reduce raw argv to the arguments the driver understands.
///
/// The first element (program name) is kept as is. `run` and `--run` become
/// `--run`; `--out` keeps its following value and is dropped when it has none.
/// Anything else, help and version flags included, is discarded silently.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut normalized = Vec::new();
    if let Some(program) = iter.next() {
        normalized.push(program);
    }

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "run" | "--run" => normalized.push("--run".to_string()),
            "--out" => {
                if let Some(name) = iter.next() {
                    normalized.push("--out".to_string());
                    normalized.push(name);
                }
            }
            _ => {}
        }
    }
    normalized
}
