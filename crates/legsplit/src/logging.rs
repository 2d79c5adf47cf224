//! Diagnostics for the host. stdout is the frame channel, so every event is
//! written to stderr, where browsers either discard it or copy it to their
//! own log.

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

/// Consulted when `--log-level` is not given.
pub const LOG_LEVEL_ENV: &str = "LEGSPLIT_LOG_LEVEL";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Host log levels. `Warn` keeps a browser-launched host quiet unless a frame
/// is dropped or the channel breaks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Level chosen from the command line and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLevel {
    pub level: LogLevel,
    /// Environment value that was not a level name and fell back to the
    /// default.
    pub rejected: Option<String>,
}

/// The flag wins, then [`LOG_LEVEL_ENV`], then [`LogLevel::Warn`].
///
/// A browser starts the host with no way to show a usage error, so an
/// unknown environment value falls back to the default instead of failing.
pub fn resolve_level(flag: Option<LogLevel>, env: Option<&str>) -> ResolvedLevel {
    if let Some(level) = flag {
        return ResolvedLevel {
            level,
            rejected: None,
        };
    }

    match env.map(str::trim).filter(|value| !value.is_empty()) {
        None => ResolvedLevel {
            level: LogLevel::default(),
            rejected: None,
        },
        Some(value) => match LogLevel::from_str(value, true) {
            Ok(level) => ResolvedLevel {
                level,
                rejected: None,
            },
            Err(_) => ResolvedLevel {
                level: LogLevel::default(),
                rejected: Some(value.to_string()),
            },
        },
    }
}

/// Install the stderr subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init_logging(format: LogFormat, flag: Option<LogLevel>) -> LogLevel {
    let env = std::env::var(LOG_LEVEL_ENV).ok();
    let resolved = resolve_level(flag, env.as_deref());

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::from(resolved.level))
        .with_ansi(false)
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Some(value) = resolved.rejected {
        tracing::warn!(
            variable = LOG_LEVEL_ENV,
            %value,
            "unknown log level, using warn"
        );
    }

    resolved.level
}
