pub mod proxy;
pub mod refresh;
pub mod script;
pub mod subscriber;

use std::sync::Arc;

use url::Url;

use crate::error::Result;

pub use proxy::WebViewProxy;
pub use refresh::WebViewRefreshHandler;
pub use script::{ChatScriptFormatter, PushScriptFormatter, ScriptFormatter};
pub use subscriber::WebViewRequestSubscriber;

/// Page-side handler name for chat requests.
pub const CHAT_HANDLER: &str = "web3inboxChat";
/// Page-side handler name for push requests.
pub const PUSH_HANDLER: &str = "web3inboxPush";

/// Embedded browser view hosting the inbox page.
///
/// Implemented by the host application. Page messages are routed back with
/// [`crate::Web3InboxClient::handle_page_message`].
pub trait WebView: Send + Sync {
    /// Navigate to `url`.
    fn load(&self, url: &Url) -> Result<()>;

    /// Evaluate `script` in the page.
    fn evaluate_script(&self, script: &str) -> Result<()>;
}

impl<T: WebView + ?Sized> WebView for Arc<T> {
    fn load(&self, url: &Url) -> Result<()> {
        (**self).load(url)
    }

    fn evaluate_script(&self, script: &str) -> Result<()> {
        (**self).evaluate_script(script)
    }
}
