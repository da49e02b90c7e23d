use tokio::sync::broadcast;
use tracing::{debug, error};

use crate::error::Result;
use crate::subscription::Subscription;
use crate::types::RpcRequest;

/// Receives messages the page posts to one named handler and fans the parsed
/// requests out to subscribers.
#[derive(Debug)]
pub struct WebViewRequestSubscriber {
    handler: &'static str,
    request_tx: broadcast::Sender<RpcRequest>,
}

impl WebViewRequestSubscriber {
    pub fn new(handler: &'static str) -> Self {
        let (request_tx, _) = broadcast::channel(256);
        Self {
            handler,
            request_tx,
        }
    }

    /// Name of the page-side message handler this subscriber serves.
    pub fn handler(&self) -> &'static str {
        self.handler
    }

    /// Subscribe to requests from the page.
    pub fn subscribe(&self) -> Subscription<RpcRequest> {
        Subscription::new(self.handler, self.request_tx.subscribe())
    }

    /// Parse a message body posted by the page and dispatch it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Web3InboxError::Json`] if the body is not a JSON-RPC
    /// request.
    pub fn handle_message(&self, body: &str) -> Result<()> {
        let request: RpcRequest = serde_json::from_str(body).map_err(|e| {
            error!(handler = self.handler, "failed to parse page message: {body}");
            e
        })?;

        debug!(
            handler = self.handler,
            id = request.id,
            method = %request.method,
            "page request"
        );

        if self.request_tx.send(request).is_err() {
            debug!(handler = self.handler, "no subscribers for page request");
        }
        Ok(())
    }
}
