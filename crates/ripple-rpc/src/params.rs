//! Parameter objects for each rippled method.
//!
//! Field names match the node's documented JSON-RPC schema exactly; `new`
//! takes the required arguments and fills every other field with its default.
//! Override a default with struct update syntax:
//!
//! ```
//! use ripple_rpc::params::AccountInfoParams;
//! use ripple_core::LedgerIndex;
//!
//! let params = AccountInfoParams {
//!     ledger_index: LedgerIndex::Validated,
//!     ..AccountInfoParams::new("r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59")
//! };
//! assert!(params.strict);
//! ```

use serde::Serialize;
use serde_json::Value;

use ripple_core::{CurrencyAmount, CurrencySpec, LedgerIndex, DEFAULT_PEER_PORT};

/// Serializes to `{}` for methods that take no parameters.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoParams {}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

// ── Account queries ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct AccountInfoParams {
    pub account: String,
    pub strict: bool,
    pub ledger_index: LedgerIndex,
    pub queue: bool,
}

impl AccountInfoParams {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            strict: true,
            ledger_index: LedgerIndex::Current,
            queue: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountLinesParams {
    pub account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Value>,
}

impl AccountLinesParams {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            marker: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountChannelsParams {
    pub account: String,
    pub destination_account: String,
    pub ledger_index: LedgerIndex,
}

impl AccountChannelsParams {
    pub fn new(account: impl Into<String>, destination_account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            destination_account: destination_account.into(),
            ledger_index: LedgerIndex::Validated,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountCurrenciesParams {
    pub account: String,
    pub account_index: u32,
    pub ledger_index: LedgerIndex,
    pub strict: bool,
}

impl AccountCurrenciesParams {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            account_index: 0,
            ledger_index: LedgerIndex::Validated,
            strict: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountObjectsParams {
    pub account: String,
    pub ledger_index: LedgerIndex,
    pub limit: u32,
    /// Ledger object type filter.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Value>,
}

impl AccountObjectsParams {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            ledger_index: LedgerIndex::Validated,
            limit: 10,
            kind: "state".into(),
            marker: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountOffersParams {
    pub account: String,
}

impl AccountOffersParams {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountTxParams {
    pub account: String,
    pub binary: bool,
    pub forward: bool,
    /// `-1` means the most recent validated ledger.
    pub ledger_index_max: i64,
    /// `-1` means the earliest ledger the node has.
    pub ledger_index_min: i64,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Value>,
}

impl AccountTxParams {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            binary: false,
            forward: false,
            ledger_index_max: -1,
            ledger_index_min: -1,
            limit: 0,
            marker: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GatewayBalancesParams {
    pub account: String,
    /// Operational addresses to exclude from the issued totals.
    pub hotwallet: Vec<String>,
    pub ledger_index: LedgerIndex,
    pub strict: bool,
}

impl GatewayBalancesParams {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            hotwallet: Vec::new(),
            ledger_index: LedgerIndex::Validated,
            strict: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NorippleCheckParams {
    pub account: String,
    pub ledger_index: LedgerIndex,
    pub limit: u32,
    /// `gateway` or `user`.
    pub role: String,
    pub transactions: bool,
}

impl NorippleCheckParams {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            ledger_index: LedgerIndex::Current,
            limit: 2,
            role: "gateway".into(),
            transactions: true,
        }
    }
}

// ── Ledger queries ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct LedgerParams {
    pub ledger_index: LedgerIndex,
    pub accounts: bool,
    pub full: bool,
    pub transactions: bool,
    pub expand: bool,
    pub owner_funds: bool,
}

impl Default for LedgerParams {
    fn default() -> Self {
        Self {
            ledger_index: LedgerIndex::Validated,
            accounts: false,
            full: false,
            transactions: false,
            expand: false,
            owner_funds: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerDataParams {
    pub ledger_hash: String,
    pub binary: bool,
    pub limit: u32,
    /// Resume point returned by a previous partial response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Value>,
}

impl LedgerDataParams {
    pub fn new(ledger_hash: impl Into<String>) -> Self {
        Self {
            ledger_hash: ledger_hash.into(),
            binary: true,
            limit: 5,
            marker: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerEntryParams {
    pub account_root: String,
    pub ledger_index: LedgerIndex,
    #[serde(rename = "type")]
    pub kind: String,
}

impl LedgerEntryParams {
    pub fn new(account_root: impl Into<String>) -> Self {
        Self {
            account_root: account_root.into(),
            ledger_index: LedgerIndex::Validated,
            kind: "account_root".into(),
        }
    }
}

// ── Transaction lifecycle ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SignParams {
    pub offline: bool,
    pub secret: String,
    pub tx_json: Value,
    pub fee_mult_max: u32,
}

impl SignParams {
    pub fn new(tx_json: Value, secret: impl Into<String>) -> Self {
        Self {
            offline: false,
            secret: secret.into(),
            tx_json,
            fee_mult_max: 1000,
        }
    }
}

impl Default for SignParams {
    fn default() -> Self {
        Self::new(empty_object(), "")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SignForParams {
    pub account: String,
    pub seed: String,
    pub key_type: String,
    pub tx_json: Value,
}

impl SignForParams {
    pub fn new(account: impl Into<String>, seed: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            seed: seed.into(),
            key_type: "ed25519".into(),
            tx_json: empty_object(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitParams {
    pub tx_blob: String,
    pub fail_hard: bool,
}

impl SubmitParams {
    pub fn new(tx_blob: impl Into<String>) -> Self {
        Self {
            tx_blob: tx_blob.into(),
            fail_hard: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitMultisignedParams {
    pub tx_json: Value,
}

impl SubmitMultisignedParams {
    pub fn new(tx_json: Value) -> Self {
        Self { tx_json }
    }
}

impl Default for SubmitMultisignedParams {
    fn default() -> Self {
        Self::new(empty_object())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionEntryParams {
    pub tx_hash: String,
    pub ledger_index: u32,
}

impl TransactionEntryParams {
    pub fn new(tx_hash: impl Into<String>, ledger_index: u32) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            ledger_index,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TxParams {
    /// Transaction hash.
    pub transaction: String,
    pub binary: bool,
}

impl TxParams {
    pub fn new(transaction: impl Into<String>) -> Self {
        Self {
            transaction: transaction.into(),
            binary: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TxHistoryParams {
    pub start: u32,
}

// ── Path-finding and order books ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct BookOffersParams {
    pub taker: String,
    pub taker_gets: CurrencySpec,
    pub taker_pays: CurrencySpec,
    pub limit: u32,
}

impl BookOffersParams {
    /// XRP/USD book, with `issuer` issuing the USD side.
    pub fn new(taker: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self::with_currencies(taker, issuer, "XRP", "USD")
    }

    /// `taker_gets` is written without an issuer; `taker_pays` is issued by
    /// `issuer`.
    pub fn with_currencies(
        taker: impl Into<String>,
        issuer: impl Into<String>,
        taker_gets_currency: impl Into<String>,
        taker_pays_currency: impl Into<String>,
    ) -> Self {
        Self {
            taker: taker.into(),
            taker_gets: CurrencySpec::new(taker_gets_currency),
            taker_pays: CurrencySpec::issued(taker_pays_currency, issuer),
            limit: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RipplePathFindParams {
    pub destination_account: String,
    pub destination_amount: CurrencyAmount,
    pub source_account: String,
    /// Sent even when empty; the node decides whether that is acceptable.
    pub source_currencies: Vec<CurrencySpec>,
}

impl RipplePathFindParams {
    pub fn new(
        destination_account: impl Into<String>,
        destination_amount: CurrencyAmount,
        source_account: impl Into<String>,
    ) -> Self {
        Self {
            destination_account: destination_account.into(),
            destination_amount,
            source_account: source_account.into(),
            source_currencies: Vec::new(),
        }
    }

    pub fn source_currencies<I, S>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_currencies = currencies.into_iter().map(CurrencySpec::new).collect();
        self
    }
}

// ── Payment channels ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ChannelAuthorizeParams {
    pub channel_id: String,
    pub secret: String,
    /// Cumulative amount of XRP, in drops, the claim authorizes.
    pub amount: String,
}

impl ChannelAuthorizeParams {
    pub fn new(
        channel_id: impl Into<String>,
        secret: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            secret: secret.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelVerifyParams {
    pub channel_id: String,
    pub signature: String,
    pub public_key: String,
    pub amount: String,
}

impl ChannelVerifyParams {
    pub fn new(
        channel_id: impl Into<String>,
        signature: impl Into<String>,
        public_key: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            signature: signature.into(),
            public_key: public_key.into(),
            amount: amount.into(),
        }
    }
}

// ── Admin: key generation ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ValidationCreateParams {
    pub secret: String,
}

impl ValidationCreateParams {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletProposeParams {
    pub key_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
}

impl Default for WalletProposeParams {
    fn default() -> Self {
        Self {
            key_type: "secp256k1".into(),
            seed: None,
            passphrase: None,
        }
    }
}

// ── Admin: server control ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct CanDeleteParams {
    /// Ledger index, ledger hash, or one of `never`, `always`, `now`.
    pub can_delete: Value,
}

impl CanDeleteParams {
    pub fn new(can_delete: impl Into<Value>) -> Self {
        Self {
            can_delete: can_delete.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectParams {
    pub ip: String,
    pub port: u16,
}

impl ConnectParams {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            port: DEFAULT_PEER_PORT,
        }
    }
}

// ── Admin: status and debugging ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct FeatureParams {
    /// Amendment ID or short name.
    pub feature: String,
    pub vetoed: bool,
}

impl FeatureParams {
    pub fn new(feature: impl Into<String>, vetoed: bool) -> Self {
        Self {
            feature: feature.into(),
            vetoed,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchInfoParams {
    pub clear: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetCountsParams {
    pub min_count: u32,
}
