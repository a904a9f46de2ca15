use serde::Serialize;
use serde_json::Value;

use ripple_core::{CurrencyAmount, Drops, RippleError};

/// What a payment delivers: XRP as a drop string, or an issued-currency object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PaymentAmount {
    Xrp(Drops),
    Issued(CurrencyAmount),
}

impl From<Drops> for PaymentAmount {
    fn from(drops: Drops) -> Self {
        PaymentAmount::Xrp(drops)
    }
}

impl From<CurrencyAmount> for PaymentAmount {
    fn from(amount: CurrencyAmount) -> Self {
        PaymentAmount::Issued(amount)
    }
}

/// `tx_json` for a `Payment` transaction. Fee and sequence are left for the
/// node to fill in when it signs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Payment {
    transaction_type: &'static str,
    pub account: String,
    pub destination: String,
    pub amount: PaymentAmount,
}

impl Payment {
    pub fn new(
        account: impl Into<String>,
        destination: impl Into<String>,
        amount: impl Into<PaymentAmount>,
    ) -> Self {
        Self {
            transaction_type: "Payment",
            account: account.into(),
            destination: destination.into(),
            amount: amount.into(),
        }
    }

    pub fn to_tx_json(&self) -> Result<Value, RippleError> {
        serde_json::to_value(self).map_err(|e| RippleError::Encode(e.to_string()))
    }
}
