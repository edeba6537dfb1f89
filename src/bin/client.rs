//! # Client Binary
//!
//! ```bash
//! cargo run --bin client -- --config config/client.toml --report-output report.json
//! ```
//!
//! Sends `a` and `b` (default `123456789.0` and `987654321.0`) to the
//! Calculation Service and prints the hypotenuse it returns.

use anyhow::Context;
use clap::Parser;
use log::info;
use std::time::Instant;

use remote_hypot::client::{ClientCore, ExchangeReport};
use remote_hypot::common::config::{load_or_default, ClientConfig};
use remote_hypot::common::logging::init_logger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the client configuration file (TOML format)
    ///
    /// Example: config/client.toml
    #[arg(short, long)]
    config: Option<String>,

    /// Path to write a JSON report of the exchange (optional)
    #[arg(long)]
    report_output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();
    let config: ClientConfig = load_or_default(args.config.as_deref())?;

    let core = ClientCore::new(config.client.name.clone());
    let (a, b) = (config.request.a, config.request.b);

    let started = Instant::now();
    let result = core
        .request_hypotenuse(&config.client.server_address, a, b)
        .await;
    let latency = started.elapsed();

    if let Ok(h) = &result {
        println!("Hypotenuse: {}", h);
    }

    if let Some(output_path) = args.report_output {
        let outcome = result.as_ref().copied().map_err(|e| e.to_string());
        let report = ExchangeReport::new(
            core.name(),
            &config.client.server_address,
            (a, b),
            outcome,
            latency,
        );
        report
            .export_to_json(&output_path)
            .with_context(|| format!("failed to write report to {}", output_path))?;
        info!("Report exported to: {}", output_path);
    }

    result
        .map(|_| ())
        .with_context(|| format!("no answer from {}", config.client.server_address))
}
