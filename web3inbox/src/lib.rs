pub mod client;
pub mod config;
pub mod error;
pub mod factory;
pub mod proxy;
pub mod subscription;
pub mod types;
pub mod url_builder;
pub mod webview;

// ---- Top-level re-exports for ergonomic usage ----

// Client + factory
pub use client::Web3InboxClient;
pub use config::{dev_config, Web3InboxConfig};
pub use error::{Result, Web3InboxError};
pub use factory::create_web3inbox_client;

// URL construction
pub use url_builder::build_url;

// Collaborators supplied by the host
pub use proxy::InboxClient;
pub use webview::WebView;

// Core types
pub use types::{Account, ChainId, ConfigParam, FeatureFlags, SigningCallback, SigningResult};

// Bridge messages
pub use types::{ClientEvent, RpcError, RpcNotification, RpcRequest, RpcResponse};
