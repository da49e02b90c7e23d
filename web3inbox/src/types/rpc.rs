use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC request posted by the inbox page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub id: u64,
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// Error object in a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

/// Response posted back into the page for a [`RpcRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub id: u64,
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    pub fn success(id: u64, result: Value) -> Self {
        Self {
            id,
            jsonrpc: JSONRPC_VERSION.into(),
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: u64, code: i32, message: impl Into<String>) -> Self {
        Self {
            id,
            jsonrpc: JSONRPC_VERSION.into(),
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Event pushed to the page without an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// An event raised by a native chat or push client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEvent {
    pub name: String,
    #[serde(default)]
    pub payload: Value,
}

impl From<ClientEvent> for RpcNotification {
    fn from(event: ClientEvent) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            method: event.name,
            params: event.payload,
        }
    }
}

/// Error codes used in responses produced by the bridge itself.
pub mod codes {
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
    pub const SIGNATURE_REJECTED: i32 = 4001;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_params() {
        let req: RpcRequest =
            serde_json::from_str(r#"{"id":7,"jsonrpc":"2.0","method":"getInvites"}"#).unwrap();
        assert_eq!(req.id, 7);
        assert_eq!(req.method, "getInvites");
        assert_eq!(req.params, Value::Null);
    }

    #[test]
    fn test_success_omits_error() {
        let json = serde_json::to_value(RpcResponse::success(1, json!(true))).unwrap();
        assert_eq!(json, json!({"id": 1, "jsonrpc": "2.0", "result": true}));
    }

    #[test]
    fn test_failure_omits_result() {
        let json = serde_json::to_value(RpcResponse::failure(2, -1, "nope")).unwrap();
        assert_eq!(
            json,
            json!({"id": 2, "jsonrpc": "2.0", "error": {"code": -1, "message": "nope"}})
        );
    }

    #[test]
    fn test_event_to_notification() {
        let event = ClientEvent {
            name: "chat_message".into(),
            payload: json!({"topic": "abc"}),
        };
        let note: RpcNotification = event.into();
        assert_eq!(note.method, "chat_message");
        assert_eq!(note.params["topic"], "abc");
        assert_eq!(note.jsonrpc, JSONRPC_VERSION);
    }
}
