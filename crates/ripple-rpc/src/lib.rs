//! ripple-rpc
//!
//! Blocking client for the rippled JSON-RPC API.
//!
//! Every method is one HTTP POST of `{"method": <name>, "params": [{...}]}`.
//! The `result` object comes back as a [`Response`]. Failures come back as a
//! [`Response`] too, so check [`Response::is_error`]:
//!   - transport failure   → `{status: "error", msg}`
//!   - HTTP error (403 …)  → `{status: "error", msg: "<code> <reason>", text}`
//!   - node-reported error → the node's body, unmodified
//!
//! Method groups:
//!   account     : account_info, account_lines, account_channels, account_currencies,
//!                 account_objects, account_offers, account_tx, gateway_balances,
//!                 noripple_check
//!   ledger      : ledger, ledger_closed, ledger_current, ledger_data, ledger_entry
//!   transaction : sign, sign_for, submit, submit_multisigned, transaction_entry,
//!                 tx, tx_history
//!   path / book : book_offers, ripple_path_find
//!   channel     : channel_authorize, channel_verify
//!   server      : fee, server_info, server_state, ping, random
//!   admin       : validation_create, wallet_propose, can_delete, connect, stop,
//!                 consensus_info, feature, fetch_info, get_counts, peers, print,
//!                 validator_list_sites, validators
//!
//! ```no_run
//! use ripple_rpc::{params::AccountInfoParams, RpcClient};
//!
//! let client = RpcClient::new("http://s1.ripple.com:51234/");
//! let info = client.account_info(&AccountInfoParams::new("r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59"));
//! if info.is_error() {
//!     eprintln!("lookup failed: {:?}", info.error_message());
//! }
//! ```

pub mod client;
pub mod config;
pub mod methods;
pub mod params;

pub use client::RpcClient;
pub use config::{ClientConfig, Credentials};
pub use ripple_core::{Response, RippleError};
