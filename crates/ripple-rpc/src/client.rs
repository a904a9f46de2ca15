use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace, warn};

use ripple_core::error::describe;
use ripple_core::{Response, RippleError};

use crate::config::ClientConfig;

/// Blocking JSON-RPC client for one rippled node.
///
/// Speaks rippled's envelope, `{"method": ..., "params": [{...}]}`, over a
/// plain HTTP POST. The typed wrappers live in [`crate::methods`]; each one
/// builds its parameter struct and hands it to [`RpcClient::call`].
#[derive(Debug, Clone)]
pub struct RpcClient {
    config: ClientConfig,
    http: Client,
}

/// Request envelope. `params` always holds exactly one object.
#[derive(Debug, Serialize)]
struct RpcRequest<'a, P: ?Sized> {
    method: &'a str,
    params: [&'a P; 1],
}

impl RpcClient {
    pub fn new(node: &str) -> Self {
        Self::from_config(ClientConfig::new(node))
    }

    pub fn with_credentials(node: &str, username: &str, password: &str) -> Self {
        Self::from_config(ClientConfig::new(node).with_credentials(username, password))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Use a preconfigured reqwest client (proxy, TLS roots, timeouts).
    pub fn with_http_client(config: ClientConfig, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn node(&self) -> &str {
        &self.config.node
    }

    /// Call a rippled method and return its `result` object.
    ///
    /// Never fails: transport and HTTP errors come back as a normalized
    /// `{status: "error", msg, ...}` object, and application errors as the
    /// node's own error body.
    pub fn call<P: Serialize + ?Sized>(&self, method: &str, params: &P) -> Response {
        match self.try_call(method, params) {
            Ok(response) => response,
            Err(err) => {
                let node = self.config.redacted_node();
                if err.is_access_denied() && self.config.auth().is_none() {
                    warn!(method, %node, "admin method refused; no credentials configured");
                } else {
                    warn!(method, %node, error = %err, "rpc call failed");
                }
                Response::from(err)
            }
        }
    }

    /// Fallible form of [`call`](Self::call). A node-reported application
    /// error is still `Ok`; only transport, HTTP status and decoding failures
    /// are `Err`.
    pub fn try_call<P: Serialize + ?Sized>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<Response, RippleError> {
        let body = serde_json::to_vec(&RpcRequest {
            method,
            params: [params],
        })
        .map_err(|e| RippleError::Encode(e.to_string()))?;

        debug!(method, node = %self.config.redacted_node(), "rpc call");

        let mut request = self
            .http
            .post(&self.config.node)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(creds) = self.config.auth() {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let resp = request
            .send()
            .map_err(|e| RippleError::Transport(describe(&e)))?;
        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| RippleError::Transport(describe(&e)))?;
        trace!(method, %status, body = %text, "rpc response");

        if status.is_client_error() || status.is_server_error() {
            return Err(RippleError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body: text,
            });
        }

        let json: Value = serde_json::from_str(&text).map_err(|e| RippleError::Decode(e.to_string()))?;
        let response = unwrap_result(status, json)?;
        if response.is_error() {
            debug!(method, error = ?response.error(), "node reported an error");
        }
        Ok(response)
    }
}

/// A 200 with a non-empty `result` object yields that object; anything else
/// is returned whole.
fn unwrap_result(status: StatusCode, mut json: Value) -> Result<Response, RippleError> {
    if status == StatusCode::OK {
        if let Some(Value::Object(result)) = json.get_mut("result") {
            if !result.is_empty() {
                return Ok(Response::new(std::mem::take(result)));
            }
        }
    }
    Response::from_value(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_wraps_params_in_single_element_list() {
        let params = json!({"account": "rAcct"});
        let envelope = serde_json::to_value(RpcRequest {
            method: "account_lines",
            params: [&params],
        })
        .unwrap();
        assert_eq!(
            envelope,
            json!({"method": "account_lines", "params": [{"account": "rAcct"}]})
        );
    }

    #[test]
    fn result_is_unwrapped_on_ok() {
        let r = unwrap_result(
            StatusCode::OK,
            json!({"result": {"status": "success", "random": "ABCD"}}),
        )
        .unwrap();
        assert_eq!(r["random"], "ABCD");
        assert!(r.get("result").is_none());
    }

    #[test]
    fn empty_result_returns_whole_body() {
        let body = json!({"result": {}, "error": "unknownCmd", "status": "error"});
        let r = unwrap_result(StatusCode::OK, body).unwrap();
        assert_eq!(r.error(), Some("unknownCmd"));
        assert_eq!(r["result"], json!({}));
    }

    #[test]
    fn non_200_success_status_returns_whole_body() {
        let r = unwrap_result(StatusCode::ACCEPTED, json!({"result": {"status": "success"}}))
            .unwrap();
        assert_eq!(r["result"]["status"], "success");
    }

    #[test]
    fn client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RpcClient>();
    }
}
