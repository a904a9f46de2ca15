use ripple_core::Response;

use crate::client::RpcClient;
use crate::params::{BookOffersParams, RipplePathFindParams};

impl RpcClient {
    /// The order book between two currencies.
    pub fn book_offers(&self, params: &BookOffersParams) -> Response {
        self.call("book_offers", params)
    }

    /// One-shot path search. The answer goes stale as the books move.
    pub fn ripple_path_find(&self, params: &RipplePathFindParams) -> Response {
        self.call("ripple_path_find", params)
    }
}
