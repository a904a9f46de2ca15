use ripple_core::Response;

use crate::client::RpcClient;
use crate::params::{
    AccountChannelsParams, AccountCurrenciesParams, AccountInfoParams, AccountLinesParams,
    AccountObjectsParams, AccountOffersParams, AccountTxParams, GatewayBalancesParams,
    NorippleCheckParams,
};

impl RpcClient {
    /// Account settings, activity and XRP balance, relative to one ledger
    /// version.
    pub fn account_info(&self, params: &AccountInfoParams) -> Response {
        self.call("account_info", params)
    }

    /// Trust lines and non-XRP balances.
    pub fn account_lines(&self, params: &AccountLinesParams) -> Response {
        self.call("account_lines", params)
    }

    /// Payment channels where the account is the source.
    pub fn account_channels(&self, params: &AccountChannelsParams) -> Response {
        self.call("account_channels", params)
    }

    /// Currencies the account can send or receive, based on its trust lines.
    /// Good enough to populate a UI; not a confirmed list.
    pub fn account_currencies(&self, params: &AccountCurrenciesParams) -> Response {
        self.call("account_currencies", params)
    }

    /// Raw ledger objects owned by the account.
    pub fn account_objects(&self, params: &AccountObjectsParams) -> Response {
        self.call("account_objects", params)
    }

    pub fn account_offers(&self, params: &AccountOffersParams) -> Response {
        self.call("account_offers", params)
    }

    /// Transactions that involved the account. Pass the returned `marker`
    /// back in to fetch the next page.
    pub fn account_tx(&self, params: &AccountTxParams) -> Response {
        self.call("account_tx", params)
    }

    /// Totals issued by a gateway, optionally excluding its operational
    /// addresses.
    pub fn gateway_balances(&self, params: &GatewayBalancesParams) -> Response {
        self.call("gateway_balances", params)
    }

    /// Compare the account's DefaultRipple and NoRipple settings with the
    /// recommended ones for its role.
    pub fn noripple_check(&self, params: &NorippleCheckParams) -> Response {
        self.call("noripple_check", params)
    }
}
