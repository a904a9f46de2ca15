use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{DROPS_PER_XRP, MAX_DROPS, XRP_DECIMALS};
use crate::error::RippleError;

// ── Currencies ───────────────────────────────────────────────────────────────

/// A currency reference without a value, as used by `book_offers` and
/// `ripple_path_find`. XRP carries no issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySpec {
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl CurrencySpec {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            issuer: None,
        }
    }

    pub fn issued(currency: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            issuer: Some(issuer.into()),
        }
    }

    pub fn xrp() -> Self {
        Self::new("XRP")
    }
}

/// An issued-currency amount: `{currency, issuer, value}`.
///
/// `value` stays a decimal string; the node does the arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    pub currency: String,
    pub issuer: String,
    pub value: String,
}

impl CurrencyAmount {
    pub fn new(
        currency: impl Into<String>,
        issuer: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            currency: currency.into(),
            issuer: issuer.into(),
            value: value.into(),
        }
    }
}

// ── Ledger selection ─────────────────────────────────────────────────────────

/// Which ledger version a query runs against.
///
/// Shortcuts go over the wire as strings, sequence numbers as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerIndex {
    Current,
    Validated,
    Closed,
    Seq(u32),
}

impl LedgerIndex {
    pub fn as_shortcut(&self) -> Option<&'static str> {
        match self {
            LedgerIndex::Current => Some("current"),
            LedgerIndex::Validated => Some("validated"),
            LedgerIndex::Closed => Some("closed"),
            LedgerIndex::Seq(_) => None,
        }
    }
}

impl Serialize for LedgerIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LedgerIndex::Seq(seq) => serializer.serialize_u32(*seq),
            other => serializer.serialize_str(other.as_shortcut().unwrap_or_default()),
        }
    }
}

impl fmt::Display for LedgerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerIndex::Seq(seq) => write!(f, "{seq}"),
            other => f.write_str(other.as_shortcut().unwrap_or_default()),
        }
    }
}

impl FromStr for LedgerIndex {
    type Err = RippleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "current" => Ok(LedgerIndex::Current),
            "validated" => Ok(LedgerIndex::Validated),
            "closed" => Ok(LedgerIndex::Closed),
            other => other
                .parse::<u32>()
                .map(LedgerIndex::Seq)
                .map_err(|_| RippleError::InvalidLedgerIndex(other.to_string())),
        }
    }
}

impl From<u32> for LedgerIndex {
    fn from(seq: u32) -> Self {
        LedgerIndex::Seq(seq)
    }
}

// ── XRP amounts ──────────────────────────────────────────────────────────────

/// An XRP amount in drops. Serializes as the decimal drop string the node
/// expects in `Amount` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Drops(pub u64);

impl Drops {
    pub const ZERO: Drops = Drops(0);

    /// Parse a decimal XRP amount such as `"12.5"` exactly.
    pub fn from_xrp(xrp: &str) -> Result<Self, RippleError> {
        let invalid = || RippleError::InvalidAmount(xrp.to_string());
        let s = xrp.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let frac = if frac.len() > XRP_DECIMALS {
            let (kept, rest) = frac.split_at(XRP_DECIMALS);
            if rest.bytes().any(|b| b != b'0') {
                return Err(invalid());
            }
            kept
        } else {
            frac
        };

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac_drops: u64 = if frac.is_empty() {
            0
        } else {
            format!("{frac:0<width$}", width = XRP_DECIMALS)
                .parse()
                .map_err(|_| invalid())?
        };

        let drops = whole
            .checked_mul(DROPS_PER_XRP)
            .and_then(|d| d.checked_add(frac_drops))
            .filter(|d| *d <= MAX_DROPS)
            .ok_or_else(invalid)?;
        Ok(Drops(drops))
    }

    /// Render as XRP with trailing zeros trimmed, e.g. `12.5`.
    pub fn to_xrp_string(&self) -> String {
        let whole = self.0 / DROPS_PER_XRP;
        let frac = self.0 % DROPS_PER_XRP;
        if frac == 0 {
            return whole.to_string();
        }
        let frac = format!("{frac:0width$}", width = XRP_DECIMALS);
        format!("{whole}.{}", frac.trim_end_matches('0'))
    }
}

impl fmt::Display for Drops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a drop count, the form the node uses in `Balance` and `Amount`.
impl FromStr for Drops {
    type Err = RippleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Drops)
            .map_err(|_| RippleError::InvalidAmount(s.to_string()))
    }
}

impl Serialize for Drops {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
