use std::sync::Arc;

use tracing::info;
use url::Url;

use crate::error::Result;

use super::WebView;

/// Reloads the inbox page at the URL it was first opened with.
pub struct WebViewRefreshHandler<W> {
    web_view: Arc<W>,
    init_url: Url,
}

impl<W: WebView> WebViewRefreshHandler<W> {
    pub fn new(web_view: Arc<W>, init_url: Url) -> Self {
        Self { web_view, init_url }
    }

    pub fn init_url(&self) -> &Url {
        &self.init_url
    }

    pub fn refresh(&self) -> Result<()> {
        info!(url = %self.init_url, "reloading inbox page");
        self.web_view.load(&self.init_url)
    }
}
