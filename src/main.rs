use anyhow::Result;
use clap::Parser;

use aghblock::{
    api::AghClient,
    app::load_config,
    cli::{handle_command, Cli},
    utils::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments; clap exits on usage errors before we get here
    let cli = Cli::parse();

    init_logger(cli.verbose);

    // Configuration must be complete before any network call
    let credentials = load_config(cli.config.as_deref())?.validate()?;
    let client = AghClient::new(&credentials);

    handle_command(&cli.command, &client).await?;
    Ok(())
}
