//! Admin methods. A node refuses these with 403 unless the caller has admin
//! access, either by connecting from an allowed address or by configuring
//! [`Credentials`](crate::config::Credentials).

use ripple_core::Response;

use crate::client::RpcClient;
use crate::params::{
    CanDeleteParams, ConnectParams, FeatureParams, FetchInfoParams, GetCountsParams, NoParams,
    ValidationCreateParams, WalletProposeParams,
};

impl RpcClient {
    // ── Key generation ───────────────────────────────────────────────────────

    /// Generate validator keys. Changes nothing on the node.
    pub fn validation_create(&self, params: &ValidationCreateParams) -> Response {
        self.call("validation_create", params)
    }

    /// Generate a key pair and account address. Changes nothing on the
    /// ledger.
    pub fn wallet_propose(&self, params: &WalletProposeParams) -> Response {
        self.call("wallet_propose", params)
    }

    // ── Server control ───────────────────────────────────────────────────────

    /// Tell a node running with `advisory_delete` which ledgers it may drop.
    pub fn can_delete(&self, params: &CanDeleteParams) -> Response {
        self.call("can_delete", params)
    }

    pub fn connect(&self, params: &ConnectParams) -> Response {
        self.call("connect", params)
    }

    /// Gracefully shut the node down.
    pub fn stop(&self) -> Response {
        self.call("stop", &NoParams {})
    }

    // ── Status and debugging ─────────────────────────────────────────────────

    pub fn consensus_info(&self) -> Response {
        self.call("consensus_info", &NoParams {})
    }

    /// Amendments the node knows about and how it votes on them.
    pub fn feature(&self, params: &FeatureParams) -> Response {
        self.call("feature", params)
    }

    pub fn fetch_info(&self, params: &FetchInfoParams) -> Response {
        self.call("fetch_info", params)
    }

    /// In-memory object counts and other health stats.
    pub fn get_counts(&self, params: &GetCountsParams) -> Response {
        self.call("get_counts", params)
    }

    pub fn peers(&self) -> Response {
        self.call("peers", &NoParams {})
    }

    /// Internal subsystem status. The output format is not stable.
    pub fn print(&self) -> Response {
        self.call("print", &NoParams {})
    }

    pub fn validator_list_sites(&self) -> Response {
        self.call("validator_list_sites", &NoParams {})
    }

    pub fn validators(&self) -> Response {
        self.call("validators", &NoParams {})
    }
}
