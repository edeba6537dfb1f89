//! # Operation Server Binary
//!
//! ```bash
//! cargo run --bin operation_server -- --config config/operation_a.toml
//! ```
//!
//! Without `--config` it listens on `10.147.19.5:5001`, serves one caller and exits.

use anyhow::Context;
use clap::Parser;

use remote_hypot::common::config::{load_or_default, OperationConfig};
use remote_hypot::common::logging::init_logger;
use remote_hypot::operation::OperationServer;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the operation server configuration file (TOML format)
    ///
    /// Example: config/operation_a.toml
    #[arg(short, long)]
    config: Option<String>,
}

async fn serve(config: OperationConfig) -> remote_hypot::Result<()> {
    let server = OperationServer::bind(config).await?;
    server.run().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();
    let config: OperationConfig = load_or_default(args.config.as_deref())?;

    serve(config).await.context("operation server failed")
}
