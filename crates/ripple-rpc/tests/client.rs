//! Call-primitive behaviour against a local mock node.
//!
//! Run with:
//!   cargo test -p ripple-rpc --test client

use std::net::TcpListener;
use std::thread;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::{json, Value};

use ripple_core::{CurrencyAmount, ADMIN_ACCESS_HINT};
use ripple_rpc::params::{
    AccountChannelsParams, AccountCurrenciesParams, AccountInfoParams, AccountLinesParams,
    AccountObjectsParams, AccountOffersParams, AccountTxParams, BookOffersParams,
    CanDeleteParams, ChannelAuthorizeParams, ChannelVerifyParams, ConnectParams, FeatureParams,
    FetchInfoParams, GatewayBalancesParams, GetCountsParams, LedgerDataParams,
    LedgerEntryParams, LedgerParams, NorippleCheckParams, RipplePathFindParams, SignForParams,
    SignParams, SubmitMultisignedParams, SubmitParams, TransactionEntryParams,
    TxHistoryParams, TxParams, ValidationCreateParams, WalletProposeParams,
};
use ripple_rpc::{ClientConfig, Response, RpcClient};

const VALID_ADDRESS: &str = "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59";
const INVALID_ADDRESS: &str = "19cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59";
const ISSUER: &str = "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B";

// ── Helpers ───────────────────────────────────────────────────────────────────

fn node_reply(server: &mut ServerGuard, method: &str, status: usize, body: Value) -> mockito::Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({ "method": method })))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create()
}

/// A loopback port with nothing listening on it.
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

// ── Envelope ──────────────────────────────────────────────────────────────────

#[test]
fn posts_single_element_params_list_as_json() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "method": "account_info",
            "params": [{
                "account": VALID_ADDRESS,
                "strict": true,
                "ledger_index": "current",
                "queue": true
            }]
        })))
        .with_status(200)
        .with_body(
            json!({"result": {"account_data": {"Account": VALID_ADDRESS}, "status": "success"}})
                .to_string(),
        )
        .create();

    let client = RpcClient::new(&server.url());
    let info = client.account_info(&AccountInfoParams::new(VALID_ADDRESS));

    mock.assert();
    assert_eq!(info.status(), Some("success"));
    assert_eq!(info["account_data"]["Account"], VALID_ADDRESS);
    assert!(info.get("error").is_none());
}

#[test]
fn book_offers_nests_taker_currencies_on_the_wire() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "method": "book_offers",
            "params": [{
                "taker": VALID_ADDRESS,
                "taker_gets": {"currency": "XRP"},
                "taker_pays": {"currency": "USD", "issuer": ISSUER},
                "limit": 10
            }]
        })))
        .with_status(200)
        .with_body(json!({"result": {"offers": [], "status": "success"}}).to_string())
        .create();

    let client = RpcClient::new(&server.url());
    let offers = client.book_offers(&BookOffersParams::with_currencies(
        VALID_ADDRESS,
        ISSUER,
        "XRP",
        "USD",
    ));

    mock.assert();
    assert!(offers.is_success());
    assert_eq!(offers["offers"], json!([]));
}

#[test]
fn raw_call_accepts_any_serializable_params() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "method": "account_nfts",
            "params": [{"account": VALID_ADDRESS}]
        })))
        .with_status(200)
        .with_body(json!({"result": {"account_nfts": [], "status": "success"}}).to_string())
        .create();

    let client = RpcClient::new(&server.url());
    let r = client.call("account_nfts", &json!({"account": VALID_ADDRESS}));

    mock.assert();
    assert!(r.is_success());
}

type Wrapper = Box<dyn Fn(&RpcClient) -> Response>;

fn wrap(call: impl Fn(&RpcClient) -> Response + 'static) -> Wrapper {
    Box::new(call)
}

/// Every typed wrapper with the exact method name and default params it must
/// put on the wire.
fn every_wrapper() -> Vec<(&'static str, Value, Wrapper)> {
    const A: &str = VALID_ADDRESS;
    vec![
        // account
        (
            "account_info",
            json!({"account": A, "strict": true, "ledger_index": "current", "queue": true}),
            wrap(|c| c.account_info(&AccountInfoParams::new(A))),
        ),
        (
            "account_lines",
            json!({"account": A}),
            wrap(|c| c.account_lines(&AccountLinesParams::new(A))),
        ),
        (
            "account_channels",
            json!({"account": A, "destination_account": ISSUER, "ledger_index": "validated"}),
            wrap(|c| c.account_channels(&AccountChannelsParams::new(A, ISSUER))),
        ),
        (
            "account_currencies",
            json!({"account": A, "account_index": 0, "ledger_index": "validated", "strict": true}),
            wrap(|c| c.account_currencies(&AccountCurrenciesParams::new(A))),
        ),
        (
            "account_objects",
            json!({"account": A, "ledger_index": "validated", "limit": 10, "type": "state"}),
            wrap(|c| c.account_objects(&AccountObjectsParams::new(A))),
        ),
        (
            "account_offers",
            json!({"account": A}),
            wrap(|c| c.account_offers(&AccountOffersParams::new(A))),
        ),
        (
            "account_tx",
            json!({
                "account": A, "binary": false, "forward": false,
                "ledger_index_max": -1, "ledger_index_min": -1, "limit": 0
            }),
            wrap(|c| c.account_tx(&AccountTxParams::new(A))),
        ),
        (
            "gateway_balances",
            json!({"account": A, "hotwallet": [], "ledger_index": "validated", "strict": true}),
            wrap(|c| c.gateway_balances(&GatewayBalancesParams::new(A))),
        ),
        (
            "noripple_check",
            json!({
                "account": A, "ledger_index": "current", "limit": 2,
                "role": "gateway", "transactions": true
            }),
            wrap(|c| c.noripple_check(&NorippleCheckParams::new(A))),
        ),
        // ledger
        (
            "ledger",
            json!({
                "ledger_index": "validated", "accounts": false, "full": false,
                "transactions": false, "expand": false, "owner_funds": false
            }),
            wrap(|c| c.ledger(&LedgerParams::default())),
        ),
        ("ledger_closed", json!({}), wrap(|c| c.ledger_closed())),
        ("ledger_current", json!({}), wrap(|c| c.ledger_current())),
        (
            "ledger_data",
            json!({"ledger_hash": "3170DA37", "binary": true, "limit": 5}),
            wrap(|c| c.ledger_data(&LedgerDataParams::new("3170DA37"))),
        ),
        (
            "ledger_entry",
            json!({"account_root": A, "ledger_index": "validated", "type": "account_root"}),
            wrap(|c| c.ledger_entry(&LedgerEntryParams::new(A))),
        ),
        // transaction
        (
            "sign",
            json!({"offline": false, "secret": "sSecret", "tx_json": {}, "fee_mult_max": 1000}),
            wrap(|c| c.sign(&SignParams::new(json!({}), "sSecret"))),
        ),
        (
            "sign_for",
            json!({"account": A, "seed": "sSeed", "key_type": "ed25519", "tx_json": {}}),
            wrap(|c| c.sign_for(&SignForParams::new(A, "sSeed"))),
        ),
        (
            "submit",
            json!({"tx_blob": "1200", "fail_hard": false}),
            wrap(|c| c.submit(&SubmitParams::new("1200"))),
        ),
        (
            "submit_multisigned",
            json!({"tx_json": {}}),
            wrap(|c| c.submit_multisigned(&SubmitMultisignedParams::default())),
        ),
        (
            "transaction_entry",
            json!({"tx_hash": "C53ECF", "ledger_index": 56865245}),
            wrap(|c| c.transaction_entry(&TransactionEntryParams::new("C53ECF", 56865245))),
        ),
        (
            "tx",
            json!({"transaction": "C53ECF", "binary": false}),
            wrap(|c| c.tx(&TxParams::new("C53ECF"))),
        ),
        (
            "tx_history",
            json!({"start": 0}),
            wrap(|c| c.tx_history(&TxHistoryParams::default())),
        ),
        // path and book
        (
            "book_offers",
            json!({
                "taker": A,
                "taker_gets": {"currency": "XRP"},
                "taker_pays": {"currency": "USD", "issuer": ISSUER},
                "limit": 10
            }),
            wrap(|c| c.book_offers(&BookOffersParams::new(A, ISSUER))),
        ),
        (
            "ripple_path_find",
            json!({
                "destination_account": ISSUER,
                "destination_amount": {"currency": "USD", "issuer": ISSUER, "value": "1"},
                "source_account": A,
                "source_currencies": []
            }),
            wrap(|c| {
                c.ripple_path_find(&RipplePathFindParams::new(
                    ISSUER,
                    CurrencyAmount::new("USD", ISSUER, "1"),
                    A,
                ))
            }),
        ),
        // channel
        (
            "channel_authorize",
            json!({"channel_id": "5DB0", "secret": "sSecret", "amount": "1000000"}),
            wrap(|c| {
                c.channel_authorize(&ChannelAuthorizeParams::new("5DB0", "sSecret", "1000000"))
            }),
        ),
        (
            "channel_verify",
            json!({
                "channel_id": "5DB0", "signature": "3044", "public_key": "aB44", "amount": "1000000"
            }),
            wrap(|c| {
                c.channel_verify(&ChannelVerifyParams::new("5DB0", "3044", "aB44", "1000000"))
            }),
        ),
        // server
        ("fee", json!({}), wrap(|c| c.fee())),
        ("server_info", json!({}), wrap(|c| c.server_info())),
        ("server_state", json!({}), wrap(|c| c.server_state())),
        ("ping", json!({}), wrap(|c| c.ping())),
        ("random", json!({}), wrap(|c| c.random())),
        // admin
        (
            "validation_create",
            json!({"secret": "BAWL"}),
            wrap(|c| c.validation_create(&ValidationCreateParams::new("BAWL"))),
        ),
        (
            "wallet_propose",
            json!({"key_type": "secp256k1"}),
            wrap(|c| c.wallet_propose(&WalletProposeParams::default())),
        ),
        (
            "can_delete",
            json!({"can_delete": "never"}),
            wrap(|c| c.can_delete(&CanDeleteParams::new("never"))),
        ),
        (
            "connect",
            json!({"ip": "192.170.145.88", "port": 6561}),
            wrap(|c| c.connect(&ConnectParams::new("192.170.145.88"))),
        ),
        ("stop", json!({}), wrap(|c| c.stop())),
        ("consensus_info", json!({}), wrap(|c| c.consensus_info())),
        (
            "feature",
            json!({"feature": "MultiSign", "vetoed": false}),
            wrap(|c| c.feature(&FeatureParams::new("MultiSign", false))),
        ),
        (
            "fetch_info",
            json!({"clear": false}),
            wrap(|c| c.fetch_info(&FetchInfoParams::default())),
        ),
        (
            "get_counts",
            json!({"min_count": 0}),
            wrap(|c| c.get_counts(&GetCountsParams::default())),
        ),
        ("peers", json!({}), wrap(|c| c.peers())),
        ("print", json!({}), wrap(|c| c.print())),
        ("validator_list_sites", json!({}), wrap(|c| c.validator_list_sites())),
        ("validators", json!({}), wrap(|c| c.validators())),
    ]
}

#[test]
fn every_wrapper_sends_its_method_and_default_params() {
    let mut server = Server::new();
    let client = RpcClient::new(&server.url());
    let wrappers = every_wrapper();
    assert_eq!(wrappers.len(), 43);

    for (method, params, wrapper) in wrappers {
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::Json(json!({ "method": method, "params": [params] })))
            .with_status(200)
            .with_body(json!({"result": {"status": "success", "echo": method}}).to_string())
            .create();

        let r = wrapper(&client);

        mock.assert();
        assert_eq!(r["echo"], method, "{method} reached the wrong mock");
    }
}

// ── Authentication ────────────────────────────────────────────────────────────

#[test]
fn sends_basic_auth_when_credentials_configured() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Basic YWRtaW46c2VjcmV0")
        .with_status(200)
        .with_body(json!({"result": {"peers": [], "status": "success"}}).to_string())
        .create();

    let client = RpcClient::with_credentials(&server.url(), "admin", "secret");
    let peers = client.peers();

    mock.assert();
    assert!(peers.is_success());
}

#[test]
fn omits_authorization_without_credentials() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(json!({"result": {"status": "success"}}).to_string())
        .create();

    let config = ClientConfig::new(server.url()).with_credentials("admin", "");
    let client = RpcClient::from_config(config);
    let pong = client.ping();

    mock.assert();
    assert!(pong.is_success());
}

// ── Server-reported errors ────────────────────────────────────────────────────

#[test]
fn malformed_address_error_is_passed_through() {
    let mut server = Server::new();
    let _mock = node_reply(
        &mut server,
        "ledger_entry",
        200,
        json!({"result": {
            "error": "malformedAddress",
            "error_code": 35,
            "error_message": "Account malformed.",
            "status": "error",
            "request": {"account_root": INVALID_ADDRESS, "command": "ledger_entry"}
        }}),
    );

    let client = RpcClient::new(&server.url());
    let entry = client.ledger_entry(&LedgerEntryParams::new(INVALID_ADDRESS));

    assert_eq!(entry.error(), Some("malformedAddress"));
    assert_eq!(entry.status(), Some("error"));
    assert_eq!(entry["error_code"], 35);
}

#[test]
fn body_without_result_is_returned_whole() {
    let mut server = Server::new();
    let body = json!({
        "error": "invalidParams",
        "error_code": 31,
        "error_message": "Invalid parameters.",
        "status": "error"
    });
    let _mock = node_reply(&mut server, "tx", 200, body.clone());

    let client = RpcClient::new(&server.url());
    let r = client.tx(&TxParams::new("not-a-hash"));

    assert_eq!(r.clone().into_value(), body);
    assert!(r.is_error());
}

// ── Transport errors ──────────────────────────────────────────────────────────

#[test]
fn forbidden_admin_method_is_normalized() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_status(403)
        .with_body("Forbidden")
        .create();

    let client = RpcClient::new(&server.url());
    let r = client.stop();

    assert_eq!(r.status(), Some("error"));
    assert_eq!(r["msg"], "403 Forbidden");
    assert_eq!(r["text"], ADMIN_ACCESS_HINT);
}

#[test]
fn other_http_errors_carry_code_and_body() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_body("internal failure")
        .create();

    let client = RpcClient::new(&server.url());
    let r = client.server_info();

    assert_eq!(r.status(), Some("error"));
    assert_eq!(r["msg"], "500 Internal Server Error");
    assert_eq!(r["text"], "internal failure");
}

#[test]
fn connection_refused_is_normalized_not_raised() {
    let client = RpcClient::new(&format!("http://127.0.0.1:{}/", closed_port()));
    let r = client.server_info();

    assert_eq!(r.status(), Some("error"));
    let msg = r["msg"].as_str().unwrap();
    assert!(!msg.is_empty());
    assert!(r.get("text").is_none());
}

#[test]
fn try_call_reports_transport_failure_as_err() {
    let client = RpcClient::new(&format!("http://127.0.0.1:{}/", closed_port()));
    let err = client.try_call("ping", &json!({})).unwrap_err();
    assert!(matches!(err, ripple_core::RippleError::Transport(_)));
}

#[test]
fn undecodable_body_is_normalized() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create();

    let client = RpcClient::new(&server.url());
    let r = client.fee();

    assert_eq!(r.status(), Some("error"));
    assert!(r["msg"].as_str().unwrap().starts_with("invalid JSON response"));
}

// ── Concurrency ───────────────────────────────────────────────────────────────

#[test]
fn clones_share_nothing_mutable_across_threads() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(json!({"result": {"status": "success"}}).to_string())
        .expect(4)
        .create();

    let client = RpcClient::new(&server.url());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            thread::spawn(move || client.ping())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_success());
    }
    mock.assert();
}
