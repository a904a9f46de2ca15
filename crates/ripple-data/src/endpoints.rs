use ripple_core::Response;

use crate::client::DataApiClient;
use crate::query::Query;

impl DataApiClient {
    // ── Ledgers ──────────────────────────────────────────────────────────────

    /// A ledger by hash, index, date, or the latest validated one.
    pub fn get_ledger(&self, ledger_identifier: &str, query: &Query) -> Response {
        self.get(&["ledgers", ledger_identifier], query)
    }

    /// Validations recorded for a ledger hash, including ones outside the
    /// validated chain.
    pub fn get_ledger_validations(&self, ledger_hash: &str, query: &Query) -> Response {
        self.get(&["ledgers", ledger_hash, "validations"], query)
    }

    pub fn get_ledger_validation(&self, ledger_hash: &str, pubkey: &str, query: &Query) -> Response {
        self.get(&["ledgers", ledger_hash, "validations", pubkey], query)
    }

    // ── Transactions ─────────────────────────────────────────────────────────

    pub fn get_transaction(&self, hash: &str, query: &Query) -> Response {
        self.get(&["transactions", hash], query)
    }

    /// Transactions by time.
    pub fn get_transactions(&self, query: &Query) -> Response {
        self.get(&["transactions"], query)
    }

    // ── Payments, exchanges, rates ───────────────────────────────────────────

    /// Payments over time, optionally for one currency (`USD+rIssuer` or `XRP`).
    pub fn get_payments(&self, currency: Option<&str>, query: &Query) -> Response {
        match currency {
            Some(currency) => self.get(&["payments", currency], query),
            None => self.get(&["payments"], query),
        }
    }

    pub fn get_exchanges(&self, base: &str, counter: &str, query: &Query) -> Response {
        self.get(&["exchanges", base, counter], query)
    }

    pub fn get_exchange_rates(&self, base: &str, counter: &str, query: &Query) -> Response {
        self.get(&["exchange_rates", base, counter], query)
    }

    /// Convert an amount between currencies at network rates.
    pub fn normalize(&self, query: &Query) -> Response {
        self.get(&["normalize"], query)
    }

    // ── Reports and stats ────────────────────────────────────────────────────

    pub fn get_daily_reports(&self, date: Option<&str>, query: &Query) -> Response {
        match date {
            Some(date) => self.get(&["reports", date], query),
            None => self.get(&["reports"], query),
        }
    }

    pub fn get_stats(&self, query: &Query) -> Response {
        self.get(&["stats"], query)
    }

    /// Accounts actively trading a currency pair.
    pub fn get_active_accounts(&self, base: &str, counter: &str, query: &Query) -> Response {
        self.get(&["active_accounts", base, counter], query)
    }

    // ── Network ──────────────────────────────────────────────────────────────

    pub fn get_exchange_volume(&self, query: &Query) -> Response {
        self.get(&["network", "exchange_volume"], query)
    }

    pub fn get_payment_volume(&self, query: &Query) -> Response {
        self.get(&["network", "payment_volume"], query)
    }

    /// Volume on off-ledger exchanges over a rolling interval.
    pub fn get_external_markets(&self, query: &Query) -> Response {
        self.get(&["network", "external_markets"], query)
    }

    pub fn get_xrp_distribution(&self, query: &Query) -> Response {
        self.get(&["network", "xrp_distribution"], query)
    }

    pub fn get_top_currencies(&self, date: Option<&str>, query: &Query) -> Response {
        match date {
            Some(date) => self.get(&["network", "top_currencies", date], query),
            None => self.get(&["network", "top_currencies"], query),
        }
    }

    pub fn get_top_markets(&self, date: Option<&str>, query: &Query) -> Response {
        match date {
            Some(date) => self.get(&["network", "top_markets", date], query),
            None => self.get(&["network", "top_markets"], query),
        }
    }

    /// Transaction cost stats per ledger, hour or day.
    pub fn get_transaction_costs(&self, query: &Query) -> Response {
        self.get(&["network", "fees"], query)
    }

    pub fn get_fee_stats(&self, query: &Query) -> Response {
        self.get(&["network", "fee_stats"], query)
    }

    // ── Topology ─────────────────────────────────────────────────────────────

    pub fn get_topology(&self, query: &Query) -> Response {
        self.get(&["network", "topology"], query)
    }

    pub fn get_topology_nodes(&self, query: &Query) -> Response {
        self.get(&["network", "topology", "nodes"], query)
    }

    /// One server by its node public key (not its validator key).
    pub fn get_topology_node(&self, pubkey: &str, query: &Query) -> Response {
        self.get(&["network", "topology", "nodes", pubkey], query)
    }

    pub fn get_topology_links(&self, query: &Query) -> Response {
        self.get(&["network", "topology", "links"], query)
    }

    // ── Validators ───────────────────────────────────────────────────────────

    pub fn get_validator(&self, pubkey: &str, query: &Query) -> Response {
        self.get(&["network", "validators", pubkey], query)
    }

    pub fn get_validators(&self, query: &Query) -> Response {
        self.get(&["network", "validators"], query)
    }

    pub fn get_validator_validations(&self, pubkey: &str, query: &Query) -> Response {
        self.get(&["network", "validators", pubkey, "validations"], query)
    }

    pub fn get_validations(&self, query: &Query) -> Response {
        self.get(&["network", "validations"], query)
    }

    /// One validator's vote stats in 24-hour intervals.
    pub fn get_single_validator_reports(&self, pubkey: &str, query: &Query) -> Response {
        self.get(&["network", "validators", pubkey, "reports"], query)
    }

    pub fn get_daily_validator_reports(&self, query: &Query) -> Response {
        self.get(&["network", "validator_reports"], query)
    }

    pub fn get_rippled_versions(&self, query: &Query) -> Response {
        self.get(&["network", "rippled_versions"], query)
    }

    // ── Gateways and currencies ──────────────────────────────────────────────

    pub fn get_all_gateways(&self, query: &Query) -> Response {
        self.get(&["gateways"], query)
    }

    pub fn get_gateway(&self, gateway: &str, query: &Query) -> Response {
        self.get(&["gateways", gateway], query)
    }

    /// Vector icon for a currency, e.g. `usd.svg`.
    pub fn get_currency_image(&self, currency_image: &str, query: &Query) -> Response {
        self.get(&["currencies", currency_image], query)
    }

    // ── Accounts ─────────────────────────────────────────────────────────────

    /// Account creations.
    pub fn get_accounts(&self, query: &Query) -> Response {
        self.get(&["accounts"], query)
    }

    pub fn get_account(&self, address: &str, query: &Query) -> Response {
        self.get(&["accounts", address], query)
    }

    pub fn get_account_balances(&self, address: &str, query: &Query) -> Response {
        self.get(&["accounts", address, "balances"], query)
    }

    /// Open orders only; filled orders are not included.
    pub fn get_account_orders(&self, address: &str, query: &Query) -> Response {
        self.get(&["accounts", address, "orders"], query)
    }

    pub fn get_account_transaction_history(&self, address: &str, query: &Query) -> Response {
        self.get(&["accounts", address, "transactions"], query)
    }

    pub fn get_transaction_by_account_and_sequence(
        &self,
        address: &str,
        sequence: u32,
        query: &Query,
    ) -> Response {
        let sequence = sequence.to_string();
        self.get(&["accounts", address, "transactions", &sequence], query)
    }

    pub fn get_account_payments(&self, address: &str, query: &Query) -> Response {
        self.get(&["accounts", address, "payments"], query)
    }

    /// Exchanges for an account; narrowed to one pair only when both `base`
    /// and `counter` are given.
    pub fn get_account_exchanges(
        &self,
        address: &str,
        base: Option<&str>,
        counter: Option<&str>,
        query: &Query,
    ) -> Response {
        match (base, counter) {
            (Some(base), Some(counter)) => {
                self.get(&["accounts", address, "exchanges", base, counter], query)
            }
            _ => self.get(&["accounts", address, "exchanges"], query),
        }
    }

    pub fn get_account_balance_changes(&self, address: &str, query: &Query) -> Response {
        self.get(&["accounts", address, "balance_changes"], query)
    }

    pub fn get_account_reports(&self, address: &str, date: Option<&str>, query: &Query) -> Response {
        match date {
            Some(date) => self.get(&["accounts", address, "reports", date], query),
            None => self.get(&["accounts", address, "reports"], query),
        }
    }

    pub fn get_account_transaction_stats(&self, address: &str, query: &Query) -> Response {
        self.get(&["accounts", address, "stats", "transactions"], query)
    }

    pub fn get_account_value_stats(&self, address: &str, query: &Query) -> Response {
        self.get(&["accounts", address, "stats", "value"], query)
    }

    // ── Health checks ────────────────────────────────────────────────────────

    pub fn check_api(&self, query: &Query) -> Response {
        self.get(&["health", "api"], query)
    }

    pub fn check_ledger_importer(&self, query: &Query) -> Response {
        self.get(&["health", "importer"], query)
    }

    pub fn check_nodes_etl(&self, query: &Query) -> Response {
        self.get(&["health", "nodes_etl"], query)
    }

    pub fn check_validations_etl(&self, query: &Query) -> Response {
        self.get(&["health", "validations_etl"], query)
    }
}
