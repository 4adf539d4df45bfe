use kb_bridge::ProducerCli;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = ProducerCli::parse();

    let config = match kb_bridge::prepare(|config| cli.apply(config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match kb_bridge::publish(&config, &cli.message()).await {
        Ok(report) => {
            info!("Message delivered to {report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to publish message: {e}");
            ExitCode::FAILURE
        }
    }
}
