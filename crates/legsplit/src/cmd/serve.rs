use legsplit::frame::FrameConfig;
use legsplit::host::{serve, HostConfig};

use crate::cmd::Settings;
use crate::exit::{host_error, CliResult, SUCCESS};

pub fn run(settings: &Settings, launch_args: &[String]) -> CliResult<i32> {
    if !launch_args.is_empty() {
        tracing::debug!(args = ?launch_args, "launched with browser arguments");
    }

    let config = HostConfig {
        frame: FrameConfig {
            max_payload_size: settings.max_payload,
        },
        ..HostConfig::default()
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        max_payload = settings.max_payload,
        "native host serving on stdio"
    );

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let stats = serve(stdin, stdout, &config).map_err(|err| host_error("serve failed", err))?;

    tracing::info!(
        handled = stats.handled,
        rejected = stats.rejected,
        dropped = stats.dropped,
        "native host stopped"
    );

    Ok(SUCCESS)
}
