//! Web3InboxClient factory.
//!
//! Builds the inbox URL, wires proxies and subscribers around the supplied
//! web view and native clients, and loads the page.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::client::Web3InboxClient;
use crate::config::Web3InboxConfig;
use crate::error::Result;
use crate::proxy::{ClientProxy, ClientSubscriber, InboxClient};
use crate::types::{Account, SigningCallback};
use crate::url_builder::build_url;
use crate::webview::{
    ChatScriptFormatter, PushScriptFormatter, WebView, WebViewProxy, WebViewRefreshHandler,
    WebViewRequestSubscriber, CHAT_HANDLER, PUSH_HANDLER,
};

/// Create a [`Web3InboxClient`] and load the inbox page into `web_view`.
///
/// `flags` follows the rules of [`build_url`]: only `false` entries are sent.
///
/// # Errors
///
/// Returns the URL construction error from [`build_url`], or the web view's
/// error if loading the page fails.
#[allow(clippy::too_many_arguments)]
pub fn create_web3inbox_client<W, C, P, I, K, B>(
    config: &Web3InboxConfig,
    web_view: Arc<W>,
    chat_client: Arc<C>,
    push_client: Arc<P>,
    account: Account,
    flags: I,
    on_sign: SigningCallback,
) -> Result<Web3InboxClient<W, C, P>>
where
    W: WebView + 'static,
    C: InboxClient,
    P: InboxClient,
    I: IntoIterator<Item = (K, B)>,
    K: fmt::Display,
    B: Borrow<bool>,
{
    let url = build_url(config, &account, flags)?;
    info!(account = %account, url = %url, "creating web3inbox client");

    let chat_webview_subscriber = WebViewRequestSubscriber::new(CHAT_HANDLER);
    let push_webview_subscriber = WebViewRequestSubscriber::new(PUSH_HANDLER);

    let chat_webview_proxy = Arc::new(WebViewProxy::new(Arc::clone(&web_view), ChatScriptFormatter));
    let push_webview_proxy = Arc::new(WebViewProxy::new(Arc::clone(&web_view), PushScriptFormatter));

    let chat_client_proxy = Arc::new(ClientProxy::new(Arc::clone(&chat_client), Arc::clone(&on_sign)));
    let chat_client_subscriber = ClientSubscriber::new(
        "chat events",
        Arc::clone(&chat_client),
        Arc::clone(&chat_webview_proxy),
    );

    let push_client_proxy = Arc::new(ClientProxy::new(Arc::clone(&push_client), on_sign));
    let push_client_subscriber = ClientSubscriber::new(
        "push events",
        Arc::clone(&push_client),
        Arc::clone(&push_webview_proxy),
    );

    let refresh_handler = WebViewRefreshHandler::new(Arc::clone(&web_view), url.clone());

    web_view.load(&url)?;

    Ok(Web3InboxClient {
        web_view,
        account,
        chat_client,
        push_client,
        chat_client_proxy,
        push_client_proxy,
        chat_client_subscriber,
        push_client_subscriber,
        chat_webview_proxy,
        push_webview_proxy,
        chat_webview_subscriber,
        push_webview_subscriber,
        refresh_handler,
    })
}
