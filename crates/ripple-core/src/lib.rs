//! Types shared by the rippled JSON-RPC client, the Data API client and the
//! account layer.

pub mod constants;
pub mod error;
pub mod response;
pub mod types;

pub use constants::*;
pub use error::RippleError;
pub use response::Response;
pub use types::*;
