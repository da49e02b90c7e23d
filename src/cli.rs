use clap::{Parser, Subcommand};
use web3inbox::ConfigParam;

/// w3i — Web3Inbox client tooling.
#[derive(Parser, Debug)]
#[command(name = "w3i", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the inbox URL for an account
    Url(UrlArgs),
}

/// Arguments for the `url` subcommand.
#[derive(Parser, Debug)]
pub struct UrlArgs {
    /// Account as CAIP-10 (eip155:1:0xabc...) or a bare address
    pub account: String,

    /// Inbox app endpoint (defaults to WEB3INBOX_URL or the dev deployment)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Provider platform tag (defaults to WEB3INBOX_PLATFORM or "ios")
    #[arg(long)]
    pub platform: Option<String>,

    /// Feature to switch off (chatEnabled, pushEnabled, settingsEnabled)
    #[arg(long = "disable", value_parser = parse_config_param)]
    pub disabled: Vec<ConfigParam>,

    /// Output as JSON instead of a bare URL
    #[arg(long)]
    pub json: bool,
}

fn parse_config_param(s: &str) -> Result<ConfigParam, String> {
    s.parse().map_err(|e: web3inbox::Web3InboxError| e.to_string())
}
