//! `toolgate` — query a running policy service from the command line.
//!
//! `toolgate check` submits one decision request and prints the verdict as
//! JSON; `toolgate stats` prints the service's audit counters. Exit codes:
//! 0 for allow/log/ask, 1 for deny, 2 for transport or usage errors.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use toolgate_client::{ToolgateClient, ToolgateConfig};
use toolgate_core::{DecisionRequest, ToolArguments};

#[derive(Parser)]
#[command(name = "toolgate", version, about = "Policy checks for agent tool calls")]
struct Cli {
    /// Policy service base URL.
    #[arg(long, global = true, env = "TOOLGATE_URL", default_value = "http://127.0.0.1:8080")]
    url: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "TOOLGATE_TIMEOUT", default_value_t = 10.0)]
    timeout: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check what verdict a request would receive.
    Check {
        /// JSON-RPC method to check (e.g. "tools/call").
        #[arg(long)]
        method: String,

        /// Tool name (for tools/call).
        #[arg(long, default_value = "")]
        tool: String,

        /// JSON object with the tool arguments.
        #[arg(long)]
        args: Option<String>,
    },

    /// Fetch audit statistics from the policy service.
    Stats,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            2
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let config = ToolgateConfig::default()
        .with_url(cli.url)
        .with_timeout(cli.timeout);
    let client = ToolgateClient::new(config)?;

    match cli.command {
        Command::Check { method, tool, args } => {
            let mut request = DecisionRequest::new(method).with_tool(tool);
            if let Some(raw) = args {
                let parsed: serde_json::Value =
                    serde_json::from_str(&raw).context("parsing --args")?;
                let map = parsed
                    .as_object()
                    .cloned()
                    .ok_or_else(|| anyhow!("--args must be a JSON object"))?;
                request = request.with_arguments(ToolArguments::from(map));
            }

            let result = client.check(&request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(if result.denied() { 1 } else { 0 })
        }
        Command::Stats => {
            let stats = client.stats().await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(0)
        }
    }
}
