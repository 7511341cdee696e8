use anyhow::Context;
use clap::Parser;
use inventory_tracker::{Catalog, CliArgs, Console, ConsoleConfig, logging::init_logging};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_filter)?;

    let config = ConsoleConfig::from_args(&args);
    info!(id_mode = ?config.id_mode, "starting inventory console");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(Catalog::new(), config, stdin.lock(), stdout.lock());

    console.run().context("console session failed")?;

    info!(products = console.catalog().len(), "inventory console finished");
    Ok(())
}
