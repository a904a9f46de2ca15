use ripple_core::Response;

use crate::client::RpcClient;
use crate::params::{ChannelAuthorizeParams, ChannelVerifyParams};

impl RpcClient {
    /// Sign a claim redeeming `amount` drops from a payment channel.
    pub fn channel_authorize(&self, params: &ChannelAuthorizeParams) -> Response {
        self.call("channel_authorize", params)
    }

    /// Check a payment channel claim signature.
    pub fn channel_verify(&self, params: &ChannelVerifyParams) -> Response {
        self.call("channel_verify", params)
    }
}
