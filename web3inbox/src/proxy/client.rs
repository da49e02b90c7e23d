use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::error::{Result, Web3InboxError};
use crate::types::{codes, Account, ClientEvent, RpcRequest, RpcResponse, SigningCallback, SigningResult};

/// Page method that registers the account identity and needs a signature.
pub const REGISTER_METHOD: &str = "register";

/// A native chat or push client the page talks to.
///
/// Implemented by the host application.
pub trait InboxClient: Send + Sync + 'static {
    /// Execute a page request other than registration.
    fn request(&self, method: &str, params: Value) -> impl Future<Output = Result<Value>> + Send;

    /// Register `account` with a wallet signature over the identity message.
    fn register(
        &self,
        account: &Account,
        signature: &str,
    ) -> impl Future<Output = Result<Value>> + Send;

    /// Subscribe to events the client wants the page to see.
    fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent>;
}

#[derive(Debug, Deserialize)]
struct RegisterParams {
    account: Account,
    message: String,
}

/// Executes page requests against a native client.
pub struct ClientProxy<C> {
    client: Arc<C>,
    on_sign: SigningCallback,
}

impl<C: InboxClient> ClientProxy<C> {
    pub fn new(client: Arc<C>, on_sign: SigningCallback) -> Self {
        Self { client, on_sign }
    }

    /// Run `request` and build the response for the page. Never fails: client
    /// errors become JSON-RPC error responses.
    pub async fn handle(&self, request: RpcRequest) -> RpcResponse {
        match self.execute(&request).await {
            Ok(result) => RpcResponse::success(request.id, result),
            Err(e) => {
                warn!(id = request.id, method = %request.method, error = %e, "page request failed");
                RpcResponse::failure(request.id, error_code(&e), e.to_string())
            }
        }
    }

    async fn execute(&self, request: &RpcRequest) -> Result<Value> {
        match request.method.as_str() {
            REGISTER_METHOD => self.register(request.params.clone()).await,
            method => self.client.request(method, request.params.clone()).await,
        }
    }

    async fn register(&self, params: Value) -> Result<Value> {
        let params: RegisterParams = serde_json::from_value(params)?;
        debug!(account = %params.account, "requesting identity signature");

        match (self.on_sign)(params.message).await {
            SigningResult::Signed(signature) => {
                self.client.register(&params.account, &signature).await
            }
            SigningResult::Rejected => Err(Web3InboxError::SignatureRejected),
        }
    }
}

fn error_code(e: &Web3InboxError) -> i32 {
    match e {
        Web3InboxError::Json(_) | Web3InboxError::InvalidAccount(_) => codes::INVALID_PARAMS,
        Web3InboxError::SignatureRejected => codes::SIGNATURE_REJECTED,
        _ => codes::INTERNAL_ERROR,
    }
}
