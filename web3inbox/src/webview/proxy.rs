use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::types::{RpcNotification, RpcResponse};

use super::script::ScriptFormatter;
use super::WebView;

/// Delivers native messages to the page by evaluating formatted scripts.
pub struct WebViewProxy<W, F> {
    web_view: Arc<W>,
    formatter: F,
}

impl<W: WebView, F: ScriptFormatter> WebViewProxy<W, F> {
    pub fn new(web_view: Arc<W>, formatter: F) -> Self {
        Self {
            web_view,
            formatter,
        }
    }

    /// Post the response to a page request.
    pub fn respond(&self, response: &RpcResponse) -> Result<()> {
        debug!(id = response.id, ok = response.error.is_none(), "responding to page");
        self.post(response)
    }

    /// Post an unsolicited event.
    pub fn notify(&self, notification: &RpcNotification) -> Result<()> {
        debug!(method = %notification.method, "notifying page");
        self.post(notification)
    }

    fn post<T: Serialize>(&self, message: &T) -> Result<()> {
        let json = serde_json::to_string(message)?;
        let script = self.formatter.format_script(&json);
        self.web_view.evaluate_script(&script)
    }
}
