use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod logging;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = cli.bridge_config()?;
    let address = config
        .address()
        .context("No usable bridge address; pass --bridge or set host in --config")?;
    let command = cli.action.to_command()?;
    let transport = config.transport();

    tracing::info!("{:?} -> {} ({})", cli.action, address, command);

    tokio::select! {
        result = transport.send_async(&address, std::slice::from_ref(&command)) => {
            let sent = result.with_context(|| format!("Failed to send to bridge {}", address))?;
            tracing::info!("Sent {} packet(s)", sent);
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted; remaining packets were not sent");
        }
    }

    Ok(())
}
