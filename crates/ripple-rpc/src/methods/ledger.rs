use ripple_core::Response;

use crate::client::RpcClient;
use crate::params::{LedgerDataParams, LedgerEntryParams, LedgerParams, NoParams};

impl RpcClient {
    pub fn ledger(&self, params: &LedgerParams) -> Response {
        self.call("ledger", params)
    }

    /// Identifiers of the most recently closed ledger, which may not be
    /// validated yet.
    pub fn ledger_closed(&self) -> Response {
        self.call("ledger_closed", &NoParams {})
    }

    /// Index of the in-progress ledger. Mostly useful for testing.
    pub fn ledger_current(&self) -> Response {
        self.call("ledger_current", &NoParams {})
    }

    /// One page of a ledger's state data. A response carrying a `marker` is
    /// partial; set it on the next request to continue.
    pub fn ledger_data(&self, params: &LedgerDataParams) -> Response {
        self.call("ledger_data", params)
    }

    /// A single ledger object in raw format.
    pub fn ledger_entry(&self, params: &LedgerEntryParams) -> Response {
        self.call("ledger_entry", params)
    }
}
