use kb_bridge::BridgeCli;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = BridgeCli::parse();

    let config = match kb_bridge::prepare(|config| cli.apply(config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match kb_bridge::run(config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("Startup failed: {e}");
            ExitCode::FAILURE
        }
    }
}
