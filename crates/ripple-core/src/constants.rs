// ── Units ────────────────────────────────────────────────────────────────────

/// Drops in one XRP. Amounts on the wire are always integer drop strings.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// Maximum fractional digits an XRP amount can carry.
pub const XRP_DECIMALS: usize = 6;

/// Total XRP ever created, in drops. No valid amount exceeds this.
pub const MAX_DROPS: u64 = 100_000_000_000 * DROPS_PER_XRP;

// ── Endpoints ────────────────────────────────────────────────────────────────

/// Public mainnet JSON-RPC endpoint operated by Ripple.
pub const DEFAULT_PUBLIC_NODE: &str = "http://s1.ripple.com:51234/";

/// Admin port of a locally running rippled with the stock config.
pub const DEFAULT_ADMIN_NODE: &str = "http://localhost:5005/";

/// Historical Data API host.
pub const DEFAULT_DATA_API: &str = "https://data.ripple.com";

/// Path prefix of every Data API endpoint.
pub const DATA_API_VERSION: &str = "v2";

/// Default peer protocol port used by `connect`.
pub const DEFAULT_PEER_PORT: u16 = 6561;

// ── Error normalization ──────────────────────────────────────────────────────

pub const STATUS_ERROR: &str = "error";
pub const STATUS_SUCCESS: &str = "success";

/// `text` attached to a normalized 403 response.
pub const ADMIN_ACCESS_HINT: &str =
    "Admin methods are only allowed on nodes with admin access.";
