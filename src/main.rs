use anyhow::Result;
use clap::Parser;

use vetty::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    vetty::init_tracing();
    let cli = Cli::parse();
    cli.run().await
}
