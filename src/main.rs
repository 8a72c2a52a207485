use std::process::ExitCode;

use clap::Parser;
use fontpack::{AtlasConfig, Cli, generate};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Cli::exit_code_for(&e);
        }
    };
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = AtlasConfig::from(cli);
    match generate(&config) {
        Ok(report) => {
            log::info!(
                "packed {} glyphs into {} rows ({}x{} px)",
                report.glyphs,
                report.rows,
                report.atlas_width,
                report.atlas_height
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
