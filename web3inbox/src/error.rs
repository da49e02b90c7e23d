use thiserror::Error;

#[derive(Error, Debug)]
pub enum Web3InboxError {
    #[error("invalid endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("cannot assemble inbox URL: {0}")]
    UrlAssembly(String),

    #[error("invalid account: {0}")]
    InvalidAccount(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("web view error: {0}")]
    WebView(String),

    #[error("client error: {0}")]
    Client(String),

    #[error("signature rejected")]
    SignatureRejected,

    #[error("unknown message handler: {0}")]
    UnknownHandler(String),

    #[error("validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, Web3InboxError>;
