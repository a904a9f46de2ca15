//! ripple-account
//!
//! An address and its secret seed bound to an [`RpcClient`], with the few
//! operations a wallet needs: read the XRP balance, sign-and-submit a
//! transaction, and send XRP or an issued currency.
//!
//! Signing happens on the node (`sign` with the secret), so the node must be
//! one you trust with the seed.

use std::fmt;

use serde_json::Value;
use tracing::{debug, info, warn};

use ripple_core::{CurrencyAmount, Drops, Response, RippleError};
use ripple_rpc::params::{AccountInfoParams, SignParams, SubmitParams};
use ripple_rpc::RpcClient;

pub mod payment;

pub use payment::{Payment, PaymentAmount};

#[derive(Clone)]
pub struct Account {
    client: RpcClient,
    address: String,
    seed: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("node", &self.client.config().redacted_node())
            .field("address", &self.address)
            .field("seed", &"<redacted>")
            .finish()
    }
}

impl Account {
    pub fn new(client: RpcClient, address: impl Into<String>, seed: impl Into<String>) -> Self {
        Self {
            client,
            address: address.into(),
            seed: seed.into(),
        }
    }

    /// The underlying client, for calls this type does not wrap.
    pub fn client(&self) -> &RpcClient {
        &self.client
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// XRP balance of `address`, or of this account when `None`.
    ///
    /// An account object without a `Balance` field reads as zero.
    pub fn balance(&self, address: Option<&str>) -> Result<Drops, RippleError> {
        let address = address.unwrap_or(&self.address);
        let result = self
            .client
            .try_call("account_info", &AccountInfoParams::new(address))?
            .into_result()?;

        match result.get("account_data").and_then(|data| data.get("Balance")) {
            None | Some(Value::Null) => Ok(Drops::ZERO),
            Some(Value::String(s)) => s.parse(),
            Some(Value::Number(n)) => n
                .as_u64()
                .map(Drops)
                .ok_or_else(|| RippleError::InvalidAmount(n.to_string())),
            Some(other) => Err(RippleError::InvalidAmount(other.to_string())),
        }
    }

    // ── Transactions ─────────────────────────────────────────────────────────

    /// Sign `tx_json` on the node with `secret`, then submit the blob.
    ///
    /// If signing yields no `tx_blob` the sign response is returned as is and
    /// nothing is submitted.
    pub fn sign_and_submit(&self, tx_json: Value, secret: &str) -> Response {
        let signed = self.client.sign(&SignParams::new(tx_json, secret));
        let blob = match signed.get("tx_blob").and_then(Value::as_str) {
            Some(blob) => blob.to_string(),
            None => {
                warn!(
                    error = signed.error().unwrap_or("no tx_blob"),
                    "sign did not return a blob; not submitting"
                );
                return signed;
            }
        };
        debug!(len = blob.len(), "signed; submitting");

        let submitted = self.client.submit(&SubmitParams::new(blob));
        if let Some(code) = submitted.get("engine_result").and_then(Value::as_str) {
            info!(engine_result = code, "submitted");
        }
        submitted
    }

    /// Send `amount` of XRP from this account.
    pub fn send_xrp(&self, destination: &str, amount: Drops) -> Response {
        self.pay(Payment::new(self.address.as_str(), destination, amount))
    }

    /// Send an amount of a currency this account issues. `value` is a
    /// decimal string and is passed through unchanged.
    pub fn send_currency(&self, destination: &str, currency: &str, value: &str) -> Response {
        let amount = CurrencyAmount::new(currency, self.address.as_str(), value);
        self.pay(Payment::new(self.address.as_str(), destination, amount))
    }

    fn pay(&self, payment: Payment) -> Response {
        match payment.to_tx_json() {
            Ok(tx_json) => self.sign_and_submit(tx_json, &self.seed),
            Err(err) => Response::from(err),
        }
    }
}
