use std::fmt;

use reqwest::Url;

use ripple_core::{RippleError, DEFAULT_ADMIN_NODE, DEFAULT_PUBLIC_NODE};

/// HTTP Basic credentials for a node's admin methods.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Only a complete pair is sent; a lone username or password is ignored.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connection settings for a single rippled node.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// JSON-RPC endpoint, e.g. `http://localhost:5005/`.
    pub node: String,
    pub credentials: Option<Credentials>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("node", &self.redacted_node())
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            node: DEFAULT_ADMIN_NODE.into(),
            credentials: None,
        }
    }
}

impl ClientConfig {
    pub fn new(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            credentials: None,
        }
    }

    /// Ripple's public mainnet node. Admin methods are refused there.
    pub fn public() -> Self {
        Self::new(DEFAULT_PUBLIC_NODE)
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Credentials that will actually be attached to requests.
    pub fn auth(&self) -> Option<&Credentials> {
        self.credentials.as_ref().filter(|c| c.is_complete())
    }

    /// `node` with any `user:password@` userinfo removed, for logging.
    pub fn redacted_node(&self) -> String {
        match Url::parse(&self.node) {
            Ok(mut url) if url.has_host() => {
                if url.password().is_some() || !url.username().is_empty() {
                    let _ = url.set_password(None);
                    let _ = url.set_username("");
                }
                url.to_string()
            }
            _ => "<invalid node url>".into(),
        }
    }

    /// Check that `node` is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), RippleError> {
        let url = Url::parse(&self.node)
            .map_err(|e| RippleError::Config(format!("invalid node url {:?}: {e}", self.node)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(RippleError::Config(format!(
                "unsupported scheme {other:?} in node url {:?}",
                self.node
            ))),
        }
    }
}
