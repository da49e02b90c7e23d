use std::sync::Arc;

use tracing::warn;

use crate::subscription::Subscription;
use crate::types::{ClientEvent, RpcNotification};
use crate::webview::{ScriptFormatter, WebView, WebViewProxy};

use super::client::InboxClient;

/// Forwards events from a native client to the page.
pub struct ClientSubscriber<C, W, F> {
    name: &'static str,
    client: Arc<C>,
    web_view_proxy: Arc<WebViewProxy<W, F>>,
}

impl<C, W, F> ClientSubscriber<C, W, F>
where
    C: InboxClient,
    W: WebView,
    F: ScriptFormatter,
{
    pub fn new(name: &'static str, client: Arc<C>, web_view_proxy: Arc<WebViewProxy<W, F>>) -> Self {
        Self {
            name,
            client,
            web_view_proxy,
        }
    }

    pub fn subscribe(&self) -> Subscription<ClientEvent> {
        Subscription::new(self.name, self.client.subscribe_events())
    }

    /// Post `event` to the page as a notification. Delivery failures are
    /// logged and dropped.
    pub fn forward(&self, event: ClientEvent) {
        let notification = RpcNotification::from(event);
        if let Err(e) = self.web_view_proxy.notify(&notification) {
            warn!(subscriber = self.name, method = %notification.method, error = %e, "failed to forward client event");
        }
    }
}
