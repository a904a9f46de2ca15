//! ripple-data
//!
//! Blocking client for the historical Data API (`https://data.ripple.com/v2/`).
//!
//! Every endpoint is a GET of `/v2/<segments>?<query>`. The decoded body is
//! returned as-is; HTTP and transport failures are normalized into the same
//! `{status: "error", msg, ...}` shape the JSON-RPC client uses.

pub mod client;
mod endpoints;
pub mod query;

pub use client::DataApiClient;
pub use query::Query;
pub use ripple_core::Response;
