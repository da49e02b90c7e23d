use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{Result, Web3InboxError};
use crate::proxy::{ClientProxy, ClientSubscriber, InboxClient};
use crate::types::{Account, RpcRequest};
use crate::webview::{
    ChatScriptFormatter, PushScriptFormatter, ScriptFormatter, WebView, WebViewProxy,
    WebViewRefreshHandler, WebViewRequestSubscriber, CHAT_HANDLER, PUSH_HANDLER,
};

/// Native handle on the inbox page running in a web view.
///
/// Built by [`crate::create_web3inbox_client`]. The host forwards page
/// messages to [`Web3InboxClient::handle_page_message`] and drives the bridge
/// with [`Web3InboxClient::run`].
pub struct Web3InboxClient<W, C, P> {
    pub(crate) web_view: Arc<W>,
    pub(crate) account: Account,
    pub(crate) chat_client: Arc<C>,
    pub(crate) push_client: Arc<P>,
    pub(crate) chat_client_proxy: Arc<ClientProxy<C>>,
    pub(crate) push_client_proxy: Arc<ClientProxy<P>>,
    pub(crate) chat_client_subscriber: ClientSubscriber<C, W, ChatScriptFormatter>,
    pub(crate) push_client_subscriber: ClientSubscriber<P, W, PushScriptFormatter>,
    pub(crate) chat_webview_proxy: Arc<WebViewProxy<W, ChatScriptFormatter>>,
    pub(crate) push_webview_proxy: Arc<WebViewProxy<W, PushScriptFormatter>>,
    pub(crate) chat_webview_subscriber: WebViewRequestSubscriber,
    pub(crate) push_webview_subscriber: WebViewRequestSubscriber,
    pub(crate) refresh_handler: WebViewRefreshHandler<W>,
}

impl<W, C, P> Web3InboxClient<W, C, P>
where
    W: WebView + 'static,
    C: InboxClient,
    P: InboxClient,
{
    /// The web view hosting the page.
    pub fn web_view(&self) -> &Arc<W> {
        &self.web_view
    }

    /// The account the inbox is scoped to.
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// The URL the page was loaded from.
    pub fn url(&self) -> &Url {
        self.refresh_handler.init_url()
    }

    pub fn chat_client(&self) -> &Arc<C> {
        &self.chat_client
    }

    pub fn push_client(&self) -> &Arc<P> {
        &self.push_client
    }

    /// Reload the page at its initial URL.
    pub fn refresh(&self) -> Result<()> {
        self.refresh_handler.refresh()
    }

    /// Route a message the page posted to `handler` (`web3inboxChat` or
    /// `web3inboxPush`).
    pub fn handle_page_message(&self, handler: &str, body: &str) -> Result<()> {
        match handler {
            CHAT_HANDLER => self.chat_webview_subscriber.handle_message(body),
            PUSH_HANDLER => self.push_webview_subscriber.handle_message(body),
            other => Err(Web3InboxError::UnknownHandler(other.to_string())),
        }
    }

    /// Serve page requests and forward client events until `cancel` fires.
    ///
    /// Each request runs on its own task so a pending signature does not
    /// block other traffic. Cancelling also abandons requests still in
    /// flight; their responses are never posted.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut chat_requests = self.chat_webview_subscriber.subscribe();
        let mut push_requests = self.push_webview_subscriber.subscribe();
        let mut chat_events = self.chat_client_subscriber.subscribe();
        let mut push_events = self.push_client_subscriber.subscribe();

        info!(account = %self.account, "web3inbox bridge running");

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("web3inbox bridge stopped");
                    return;
                }
                Some(request) = chat_requests.next() => {
                    spawn_request(
                        Arc::clone(&self.chat_client_proxy),
                        Arc::clone(&self.chat_webview_proxy),
                        request,
                        cancel.clone(),
                    );
                }
                Some(request) = push_requests.next() => {
                    spawn_request(
                        Arc::clone(&self.push_client_proxy),
                        Arc::clone(&self.push_webview_proxy),
                        request,
                        cancel.clone(),
                    );
                }
                Some(event) = chat_events.next() => {
                    self.chat_client_subscriber.forward(event);
                }
                Some(event) = push_events.next() => {
                    self.push_client_subscriber.forward(event);
                }
            }
        }
    }
}

fn spawn_request<C, W, F>(
    client_proxy: Arc<ClientProxy<C>>,
    web_view_proxy: Arc<WebViewProxy<W, F>>,
    request: RpcRequest,
    cancel: CancellationToken,
) where
    C: InboxClient,
    W: WebView + 'static,
    F: ScriptFormatter + 'static,
{
    tokio::spawn(async move {
        let id = request.id;
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(id, "page request abandoned on shutdown");
                return;
            }
            response = client_proxy.handle(request) => response,
        };
        if let Err(e) = web_view_proxy.respond(&response) {
            warn!(id = response.id, error = %e, "failed to deliver response to page");
        }
    });
}
