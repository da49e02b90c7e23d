use std::sync::Arc;

use futures_util::future::BoxFuture;

/// Outcome of asking the wallet to sign a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningResult {
    /// Hex-encoded signature.
    Signed(String),
    Rejected,
}

/// Callback the host app supplies to sign identity messages.
pub type SigningCallback = Arc<dyn Fn(String) -> BoxFuture<'static, SigningResult> + Send + Sync>;
