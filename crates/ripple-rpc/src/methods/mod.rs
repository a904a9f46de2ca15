//! Typed wrappers over [`RpcClient::call`](crate::RpcClient::call), one per
//! rippled method, grouped the way the rippled API reference groups them.
//!
//! Every wrapper returns the node's response untouched: no local validation,
//! no retries, no post-processing.

mod account;
mod admin;
mod channel;
mod ledger;
mod path;
mod server;
mod transaction;
