use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use legsplit::engine::SplitResult;
use legsplit::host::Response;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Print a split. JSON output is the exact reply the host would send; the
/// other formats show the exact decimals.
pub fn print_split(result: &SplitResult, response: &Response, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ONE PERCENT", "LEG 1", "LEG 2", "LEG 3"])
                .add_row(vec![
                    result.one_percent.to_string(),
                    result.legs[0].to_string(),
                    result.legs[1].to_string(),
                    result.legs[2].to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{}", pretty_line(result));
        }
    }
}

fn pretty_line(result: &SplitResult) -> String {
    format!(
        "onePercent={} legs={},{},{}",
        result.one_percent, result.legs[0], result.legs[1], result.legs[2]
    )
}
