use ripple_core::Response;

use crate::client::RpcClient;
use crate::params::NoParams;

impl RpcClient {
    /// Open-ledger transaction cost requirements.
    pub fn fee(&self) -> Response {
        self.call("fee", &NoParams {})
    }

    pub fn server_info(&self) -> Response {
        self.call("server_info", &NoParams {})
    }

    /// Like `server_info`, with machine-readable units.
    pub fn server_state(&self) -> Response {
        self.call("server_state", &NoParams {})
    }

    pub fn ping(&self) -> Response {
        self.call("ping", &NoParams {})
    }

    /// 256 bits of node-provided entropy.
    pub fn random(&self) -> Response {
        self.call("random", &NoParams {})
    }
}
