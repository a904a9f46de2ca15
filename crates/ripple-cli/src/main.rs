//! ripple
//!
//! Command-line front end for a rippled node and the Data API.
//!
//! Usage:
//!   ripple server-info                       [--node <url>]
//!   ripple account-info  <address>
//!   ripple balance       [<address>]          [--address <addr>]
//!   ripple send-xrp      --to <addr> --amount <xrp> --address <addr> --seed <seed>
//!   ripple peers                              --username <u> --password <p>
//!   ripple call          <method> ['{"key": "value"}']
//!   ripple data          ledgers <hash> --query transactions=true
//!
//! Every command prints the response as pretty JSON and exits non-zero when
//! the response is an error.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ripple_account::Account;
use ripple_core::{Drops, LedgerIndex, Response, DEFAULT_DATA_API, DEFAULT_PUBLIC_NODE};
use ripple_data::{DataApiClient, Query};
use ripple_rpc::params::{
    AccountInfoParams, AccountLinesParams, AccountTxParams, BookOffersParams, LedgerParams,
    TxParams,
};
use ripple_rpc::{ClientConfig, RpcClient};

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "ripple", version, about = "Query a rippled node and the Ripple Data API")]
struct Args {
    /// rippled JSON-RPC endpoint.
    #[arg(long, global = true, env = "RIPPLED_URL", default_value = DEFAULT_PUBLIC_NODE)]
    node: String,

    /// Basic-auth user for admin methods.
    #[arg(long, global = true, env = "RIPPLED_USERNAME")]
    username: Option<String>,

    /// Basic-auth password for admin methods.
    #[arg(long, global = true, env = "RIPPLED_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Data API base URL.
    #[arg(long, global = true, env = "RIPPLE_DATA_API", default_value = DEFAULT_DATA_API)]
    data_api: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Node status, load and last closed ledger.
    ServerInfo,

    /// Current transaction cost and queue state.
    Fee,

    Ping,

    AccountInfo {
        address: String,
        /// current, validated, closed or a sequence number.
        #[arg(long, default_value = "current")]
        ledger: LedgerIndex,
    },

    /// Trust lines of an account.
    AccountLines {
        address: String,
        /// Resume from a `marker` printed by a previous page.
        #[arg(long)]
        marker: Option<String>,
    },

    AccountTx {
        address: String,
        /// Maximum transactions to return (0 = server default).
        #[arg(long, default_value_t = 0)]
        limit: u32,
        /// Oldest first.
        #[arg(long)]
        forward: bool,
        /// Resume from a `marker` printed by a previous page.
        #[arg(long)]
        marker: Option<String>,
    },

    Ledger {
        #[arg(default_value = "validated")]
        ledger: LedgerIndex,
        /// Include transactions.
        #[arg(long)]
        transactions: bool,
        /// Expand transactions and accounts into full objects.
        #[arg(long)]
        expand: bool,
    },

    /// Hash and sequence of the last closed ledger.
    LedgerClosed,

    /// Look up a transaction by hash.
    Tx { hash: String },

    /// Offers in an order book. The pays side is issued by `issuer`.
    BookOffers {
        taker: String,
        issuer: String,
        #[arg(long, default_value = "XRP")]
        gets: String,
        #[arg(long, default_value = "USD")]
        pays: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// XRP balance of an account.
    Balance {
        /// Defaults to --address.
        account: Option<String>,
        #[arg(long, env = "RIPPLE_ADDRESS")]
        address: Option<String>,
    },

    /// Sign on the node and submit an XRP payment.
    SendXrp {
        #[arg(long)]
        to: String,
        /// Amount in XRP, e.g. 12.5.
        #[arg(long)]
        amount: String,
        #[arg(long, env = "RIPPLE_ADDRESS")]
        address: String,
        #[arg(long, env = "RIPPLE_SEED", hide_env_values = true)]
        seed: String,
    },

    /// Connected peers (admin).
    Peers,

    /// Call any method with a JSON object as its params.
    Call {
        method: String,
        #[arg(default_value = "{}")]
        params: String,
    },

    /// GET a Data API path, e.g. `data network fees --query interval=day`.
    Data {
        #[arg(required = true)]
        segments: Vec<String>,
        /// key=value, repeatable.
        #[arg(long = "query", short = 'q', value_parser = parse_key_value)]
        query: Vec<(String, String)>,
    },
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,ripple=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = client_config(&args)?;
    let client = RpcClient::from_config(config);

    let response = match args.command {
        Command::ServerInfo => client.server_info(),
        Command::Fee => client.fee(),
        Command::Ping => client.ping(),
        Command::Peers => client.peers(),
        Command::LedgerClosed => client.ledger_closed(),

        Command::AccountInfo { address, ledger } => client.account_info(&AccountInfoParams {
            ledger_index: ledger,
            ..AccountInfoParams::new(address)
        }),

        Command::AccountLines { address, marker } => {
            client.account_lines(&AccountLinesParams {
                marker: marker.as_deref().map(parse_marker).transpose()?,
                ..AccountLinesParams::new(address)
            })
        }

        Command::AccountTx { address, limit, forward, marker } => {
            client.account_tx(&AccountTxParams {
                limit,
                forward,
                marker: marker.as_deref().map(parse_marker).transpose()?,
                ..AccountTxParams::new(address)
            })
        }

        Command::Ledger { ledger, transactions, expand } => client.ledger(&LedgerParams {
            ledger_index: ledger,
            transactions,
            expand,
            ..LedgerParams::default()
        }),

        Command::Tx { hash } => client.tx(&TxParams::new(hash)),

        Command::BookOffers { taker, issuer, gets, pays, limit } => {
            client.book_offers(&BookOffersParams {
                limit,
                ..BookOffersParams::with_currencies(taker, issuer, gets, pays)
            })
        }

        Command::Balance { account, address } => {
            let Some(target) = account.or(address) else {
                bail!("no account given; pass one or set RIPPLE_ADDRESS");
            };
            let drops = Account::new(client, target.as_str(), "")
                .balance(None)
                .with_context(|| format!("reading balance of {target}"))?;
            println!("Account:  {target}");
            println!("Balance:  {} XRP  ({drops} drops)", drops.to_xrp_string());
            return Ok(());
        }

        Command::SendXrp { to, amount, address, seed } => {
            let drops = Drops::from_xrp(&amount).context("parsing --amount")?;
            info!(from = %address, %to, %drops, "sending XRP");
            Account::new(client, address, seed).send_xrp(&to, drops)
        }

        Command::Call { method, params } => {
            let params = parse_params(&params)?;
            client.call(&method, &params)
        }

        Command::Data { segments, query } => {
            let api = DataApiClient::new(&args.data_api);
            let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
            api.get(&segments, &query.into_iter().collect::<Query>())
        }
    };

    print_response(&response)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn client_config(args: &Args) -> anyhow::Result<ClientConfig> {
    let mut config = ClientConfig::new(args.node.as_str());
    if let (Some(user), Some(pass)) = (&args.username, &args.password) {
        config = config.with_credentials(user.as_str(), pass.as_str());
    }
    config.validate().context("checking --node")?;
    Ok(config)
}

fn parse_params(raw: &str) -> anyhow::Result<Value> {
    let params: Value = serde_json::from_str(raw).context("params must be valid JSON")?;
    if !params.is_object() {
        bail!("params must be a JSON object, got {params}");
    }
    Ok(params)
}

/// A marker is whatever JSON the node returned; a bare word is taken as a
/// string.
fn parse_marker(raw: &str) -> anyhow::Result<Value> {
    Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))
}

fn print_response(response: &Response) -> anyhow::Result<()> {
    let pretty = serde_json::to_string_pretty(response).context("rendering response")?;
    println!("{pretty}");
    if response.is_error() {
        let reason = response
            .error_message()
            .or_else(|| response.error())
            .unwrap_or("request failed");
        bail!("{reason}");
    }
    if let Some(marker) = response.marker() {
        info!(%marker, "partial result; pass --marker to fetch the next page");
    }
    Ok(())
}
