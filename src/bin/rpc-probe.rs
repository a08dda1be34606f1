//! Diagnostic CLI: probe a list of JSON-RPC endpoints and report
//! per-endpoint latency plus the endpoint selection would pick.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rpc_failover::{FailoverConfig, FailoverExecutor};

#[derive(Parser)]
#[command(name = "rpc-probe")]
#[command(about = "Probe JSON-RPC endpoints for chain correctness and latency", long_about = None)]
struct Cli {
    /// Candidate endpoint URLs, in configured order
    #[arg(required = true)]
    urls: Vec<String>,

    /// Expected chain id (56 = BSC mainnet)
    #[arg(long, default_value_t = 56)]
    chain_id: u64,

    /// Probe timeout in milliseconds
    #[arg(long, default_value_t = 3000)]
    timeout_ms: u64,

    /// Operator-preferred endpoint; wins over faster candidates when healthy
    #[arg(long)]
    priority: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpc_failover=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let timeout = Duration::from_millis(cli.timeout_ms);

    let config = FailoverConfig {
        endpoints: cli.urls,
        priority_endpoint: cli.priority,
        chain_id: cli.chain_id,
        probe_timeout_ms: cli.timeout_ms,
        ..FailoverConfig::default()
    };
    let executor = FailoverExecutor::new(config)?;
    let selector = executor.selector();

    println!("probing {} endpoints (chain id {:#x})\n", selector.candidates().len(), cli.chain_id);
    for endpoint in selector.candidates() {
        let result = selector.prober().probe(endpoint, timeout).await;
        match &result.error {
            None => println!("  OK   {:>5} ms  {}", result.latency.as_millis(), endpoint),
            Some(e) => println!("  FAIL {:>5} ms  {}  ({})", result.latency.as_millis(), endpoint, e),
        }
    }

    let best = selector.best_endpoint(true).await;
    println!("\nselected: {}", best);
    Ok(())
}
