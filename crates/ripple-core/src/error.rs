use thiserror::Error;

#[derive(Debug, Error)]
pub enum RippleError {
    // ── Transport errors ─────────────────────────────────────────────────────
    /// Connection-level failure: DNS, refused connection, timeout, TLS.
    #[error("{0}")]
    Transport(String),

    /// The node answered with a 4xx/5xx status.
    #[error("{status} {reason}")]
    Http {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("invalid JSON response: {0}")]
    Decode(String),

    #[error("could not encode request: {0}")]
    Encode(String),

    // ── Server errors ────────────────────────────────────────────────────────
    /// The node processed the request and reported an application error.
    #[error("server error {error}: {message}")]
    Server { error: String, message: String },

    // ── Local input ──────────────────────────────────────────────────────────
    #[error("invalid XRP amount: {0}")]
    InvalidAmount(String),

    #[error("invalid ledger index: {0}")]
    InvalidLedgerIndex(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl RippleError {
    /// True for the 403 a node returns when an admin method is called
    /// without admin access.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, RippleError::Http { status: 403, .. })
    }
}

/// Render an error together with its `source()` chain, outermost first.
///
/// Transport libraries keep the useful part ("Connection refused") in a
/// nested source, so the top-level `Display` alone is not enough.
pub fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}
