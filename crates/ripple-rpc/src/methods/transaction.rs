use ripple_core::Response;

use crate::client::RpcClient;
use crate::params::{
    SignForParams, SignParams, SubmitMultisignedParams, SubmitParams, TransactionEntryParams,
    TxHistoryParams, TxParams,
};

impl RpcClient {
    /// Have the node sign `tx_json` with `secret` and return the blob.
    ///
    /// The secret travels to the node in the request body. Only use this
    /// against a node you run yourself.
    pub fn sign(&self, params: &SignParams) -> Response {
        self.call("sign", params)
    }

    /// One signature for a multi-signed transaction.
    pub fn sign_for(&self, params: &SignForParams) -> Response {
        self.call("sign_for", params)
    }

    pub fn submit(&self, params: &SubmitParams) -> Response {
        self.call("submit", params)
    }

    pub fn submit_multisigned(&self, params: &SubmitMultisignedParams) -> Response {
        self.call("submit_multisigned", params)
    }

    /// Look a transaction up in one specific ledger version. Prefer
    /// [`tx`](Self::tx), which searches every ledger the node has.
    pub fn transaction_entry(&self, params: &TransactionEntryParams) -> Response {
        self.call("transaction_entry", params)
    }

    pub fn tx(&self, params: &TxParams) -> Response {
        self.call("tx", params)
    }

    /// Deprecated on the node side and may disappear without notice.
    pub fn tx_history(&self, params: &TxHistoryParams) -> Response {
        self.call("tx_history", params)
    }
}
