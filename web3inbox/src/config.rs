/// Development deployment of the hosted inbox app.
pub const DEV_ENDPOINT: &str =
    "https://web3inbox-dev-hidden-git-feature-push-sync-walletconnect1.vercel.app/";

/// Platform tag sent as the chat, push and auth provider.
pub const DEFAULT_PLATFORM: &str = "ios";

/// Configuration for the Web3Inbox client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Web3InboxConfig {
    /// Base URL of the hosted inbox app (e.g. `https://web3inbox.com/`).
    pub endpoint: String,
    /// Provider tag the page uses to pick its native bridge (e.g. `ios`).
    pub platform: String,
}

impl Default for Web3InboxConfig {
    fn default() -> Self {
        dev_config()
    }
}

impl Web3InboxConfig {
    /// Read the configuration from `WEB3INBOX_URL` and `WEB3INBOX_PLATFORM`.
    /// Unset or empty variables fall back to [`dev_config`].
    pub fn from_env() -> Self {
        let defaults = dev_config();
        Self {
            endpoint: env_or("WEB3INBOX_URL", defaults.endpoint),
            platform: env_or("WEB3INBOX_PLATFORM", defaults.platform),
        }
    }

    /// Override the platform tag.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }
}

fn env_or(name: &str, default: String) -> String {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default,
    }
}

/// Return the development configuration.
pub fn dev_config() -> Web3InboxConfig {
    Web3InboxConfig {
        endpoint: DEV_ENDPOINT.into(),
        platform: DEFAULT_PLATFORM.into(),
    }
}
