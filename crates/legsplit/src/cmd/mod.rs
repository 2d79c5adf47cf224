use clap::{Args, Subcommand};
use legsplit::engine::DEFAULT_DECIMALS;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod serve;
pub mod split;
pub mod version;

/// Settings taken from global flags.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub format: OutputFormat,
    pub max_payload: usize,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve native messaging requests on stdin/stdout (the default).
    Serve(ServeArgs),
    /// Compute a single split and print it.
    Split(SplitArgs),
    /// Show version information.
    Version(VersionArgs),
    /// Arguments a browser passes when it launches the host (caller origin,
    /// manifest path, window handle). Served like `serve`.
    #[command(external_subcommand)]
    Launch(Vec<String>),
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve(ServeArgs::default())
    }
}

pub fn run(command: Command, settings: &Settings) -> CliResult<i32> {
    match command {
        Command::Serve(_) => serve::run(settings, &[]),
        Command::Launch(args) => serve::run(settings, &args),
        Command::Split(args) => split::run(args, settings.format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Balance as a decimal number (e.g. 1000, 12.34, -5, 1e3).
    #[arg(allow_hyphen_values = true)]
    pub balance: String,
    /// Decimal places to round to; clamped to 0..=8.
    #[arg(long, short = 'd', default_value_t = i64::from(DEFAULT_DECIMALS), allow_hyphen_values = true)]
    pub decimals: i64,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
