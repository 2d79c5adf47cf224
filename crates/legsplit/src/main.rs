mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "legsplit",
    version,
    about = "Native messaging host: one percent of a balance, split into three exact legs"
)]
struct Cli {
    /// Output format for one-shot commands.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr). Falls back to `LEGSPLIT_LOG_LEVEL`, then
    /// `warn`.
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<LogLevel>,

    /// Largest frame payload accepted or sent, in bytes.
    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = legsplit::frame::DEFAULT_MAX_PAYLOAD,
        env = "LEGSPLIT_MAX_PAYLOAD",
        global = true
    )]
    max_payload: usize,

    /// Without a subcommand the host serves on stdin/stdout.
    #[command(subcommand)]
    command: Option<Command>,
}

fn main() {
    let cli = Cli::parse();
    let level = init_logging(cli.log_format, cli.log_level);
    tracing::debug!(?level, "logging ready");

    let settings = cmd::Settings {
        format: cli.format.unwrap_or_else(OutputFormat::default_for_stdout),
        max_payload: cli.max_payload,
    };
    let command = cli.command.unwrap_or_default();
    let result = cmd::run(command, &settings);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_serve() {
        let cli = Cli::try_parse_from(["legsplit"]).expect("bare invocation should parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, None);
        assert!(matches!(cli.command.unwrap_or_default(), Command::Serve(_)));
    }

    #[test]
    fn chrome_launch_arguments_are_accepted() {
        let cli = Cli::try_parse_from([
            "legsplit",
            "chrome-extension://abcdefghijklmnop/",
            "--parent-window=0",
        ])
        .expect("chrome launch args should parse");

        match cli.command {
            Some(Command::Launch(args)) => {
                assert_eq!(
                    args,
                    ["chrome-extension://abcdefghijklmnop/", "--parent-window=0"]
                );
            }
            other => panic!("expected launch command, got {other:?}"),
        }
    }

    #[test]
    fn firefox_launch_arguments_are_accepted() {
        let cli = Cli::try_parse_from([
            "legsplit",
            "/usr/lib/mozilla/native-messaging-hosts/legsplit.json",
            "legsplit@example.org",
        ])
        .expect("firefox launch args should parse");
        assert!(matches!(cli.command, Some(Command::Launch(_))));
    }

    #[test]
    fn parses_split_subcommand() {
        let cli = Cli::try_parse_from(["legsplit", "split", "-1000", "--decimals", "3"])
            .expect("split args should parse");

        match cli.command {
            Some(Command::Split(args)) => {
                assert_eq!(args.balance, "-1000");
                assert_eq!(args.decimals, 3);
            }
            other => panic!("expected split command, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_before_subcommand() {
        let cli = Cli::try_parse_from([
            "legsplit",
            "--log-level",
            "debug",
            "--max-payload",
            "1024",
            "serve",
        ])
        .expect("serve args should parse");

        assert_eq!(cli.max_payload, 1024);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(matches!(cli.command, Some(Command::Serve(_))));
    }
}
