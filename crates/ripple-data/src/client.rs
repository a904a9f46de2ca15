use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, trace, warn};

use ripple_core::error::describe;
use ripple_core::{Response, RippleError, DATA_API_VERSION, DEFAULT_DATA_API};

use crate::query::Query;

/// Blocking client for the Data API.
///
/// The endpoint methods are in `endpoints.rs`; each maps to one
/// `GET /v2/...` route and forwards the caller's [`Query`] unchanged.
#[derive(Debug, Clone)]
pub struct DataApiClient {
    base: String,
    http: Client,
}

impl Default for DataApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_API)
    }
}

impl DataApiClient {
    pub fn new(base: &str) -> Self {
        Self::with_http_client(base, Client::new())
    }

    pub fn with_http_client(base: &str, http: Client) -> Self {
        Self {
            base: base.to_string(),
            http,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Build `<base>/v2/<segments...>?<query>`. Segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str], query: &Query) -> Result<Url, RippleError> {
        let mut url = Url::parse(&self.base)
            .map_err(|e| RippleError::Config(format!("invalid Data API url {:?}: {e}", self.base)))?;
        url.path_segments_mut()
            .map_err(|_| RippleError::Config(format!("Data API url {:?} cannot take a path", self.base)))?
            .pop_if_empty()
            .push(DATA_API_VERSION)
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(url)
    }

    /// GET an endpoint and return the decoded body, or a normalized error.
    pub fn get(&self, segments: &[&str], query: &Query) -> Response {
        match self.try_get(segments, query) {
            Ok(response) => response,
            Err(err) => {
                warn!(path = %segments.join("/"), error = %err, "data api request failed");
                Response::from(err)
            }
        }
    }

    pub fn try_get(&self, segments: &[&str], query: &Query) -> Result<Response, RippleError> {
        let url = self.endpoint(segments, query)?;
        debug!(url = %redacted(&url), "data api request");

        let resp = self
            .http
            .get(url)
            .send()
            .map_err(|e| RippleError::Transport(describe(&e)))?;
        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| RippleError::Transport(describe(&e)))?;
        trace!(%status, body = %text, "data api response");

        if status.is_client_error() || status.is_server_error() {
            return Err(RippleError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body: text,
            });
        }

        let json: Value =
            serde_json::from_str(&text).map_err(|e| RippleError::Decode(e.to_string()))?;
        Response::from_value(json)
    }
}

/// `url` without any `user:password@` userinfo.
fn redacted(url: &Url) -> Url {
    let mut shown = url.clone();
    let _ = shown.set_password(None);
    let _ = shown.set_username("");
    shown
}
