//! # Calculation Server Binary
//!
//! ```bash
//! cargo run --bin calculation_server -- --config config/calculation.toml
//! ```
//!
//! Without `--config` it listens on `10.147.19.244:5000` and delegates to
//! `10.147.19.224:5001` (for `a`) and `10.147.19.225:5001` (for `b`).

use anyhow::Context;
use clap::Parser;

use remote_hypot::calculation::CalculationServer;
use remote_hypot::common::config::{load_or_default, CalculationConfig};
use remote_hypot::common::logging::init_logger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the calculation server configuration file (TOML format)
    ///
    /// Example: config/calculation.toml
    #[arg(short, long)]
    config: Option<String>,
}

async fn serve(config: CalculationConfig) -> remote_hypot::Result<()> {
    let server = CalculationServer::bind(config).await?;
    server.run().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();
    let config: CalculationConfig = load_or_default(args.config.as_deref())?;

    serve(config).await.context("calculation server failed")
}
