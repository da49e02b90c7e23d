mod cli;
mod error;
mod output;

use std::io;

use clap::Parser;
use cli::{Command, UrlArgs};
use tracing::{error, info};
use web3inbox::{build_url, Account, FeatureFlags, Web3InboxConfig};

use crate::error::CliError;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present

    match cli.command {
        Command::Url(args) => {
            if let Err(e) = run_url(args) {
                error!(error = %e, "failed to build inbox URL");
                std::process::exit(1);
            }
        }
    }
}

fn run_url(args: UrlArgs) -> Result<(), CliError> {
    let mut config = Web3InboxConfig::from_env();
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(platform) = args.platform {
        config.platform = platform;
    }

    let account: Account = args.account.parse()?;
    let flags: FeatureFlags = args.disabled.iter().map(|param| (*param, false)).collect();

    let url = build_url(&config, &account, &flags)?;
    info!(account = %account, disabled = ?args.disabled, "inbox URL ready");

    let stdout = io::stdout();
    output::write_url(&account, &url, args.json, &mut stdout.lock())
}
