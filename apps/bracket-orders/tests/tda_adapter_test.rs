//! TDA adapter tests against a local mock HTTP server.
//!
//! Covers the quote and order endpoints end to end: request shape, auth
//! header, status handling and error payload propagation.

#![allow(clippy::unwrap_used)]

use std::io::Write;

use bracket_orders::application::ports::{
    OrderSubmissionPort, QuoteError, QuotePort, SubmissionError,
};
use bracket_orders::{
    BracketOrder, BracketOrderBuilder, PositionSizer, RiskParameters, Symbol, TdaBrokerAdapter,
    TdaConfig,
};
use rust_decimal_macros::dec;
use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT_ID: &str = "123456789";

fn token_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"creation_timestamp": 1611345600, "token": {"access_token": "test-token"}}"#)
        .unwrap();
    file
}

fn adapter(server: &MockServer, token: &NamedTempFile) -> TdaBrokerAdapter {
    let config = TdaConfig::new("CLIENTID".to_string(), ACCOUNT_ID.to_string(), token.path())
        .with_base_url(server.uri());
    TdaBrokerAdapter::new(&config).unwrap()
}

fn amd_bracket() -> BracketOrder {
    let size = PositionSizer::default()
        .size(&RiskParameters::new(dec!(101.00), dec!(100.00), dec!(50)))
        .unwrap();
    BracketOrderBuilder::default()
        .build(Symbol::new("AMD"), &size, dec!(101.00), dec!(100.00))
        .unwrap()
}

// =============================================================================
// Quotes
// =============================================================================

#[tokio::test]
async fn quote_returns_day_range() {
    let server = MockServer::start().await;
    let token = token_file();

    Mock::given(method("GET"))
        .and(path("/v1/marketdata/AAPL/quotes"))
        .and(query_param("apikey", "CLIENTID"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AAPL": {
                "symbol": "AAPL",
                "highPrice": 148.86,
                "lowPrice": 145.26,
                "lastPrice": 147.01,
                "quoteTimeInLong": 1_611_345_600_000_i64
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let quote = adapter(&server, &token)
        .get_quote(&Symbol::new("AAPL"))
        .await
        .unwrap();

    assert_eq!(quote.high_price, dec!(148.86));
    assert_eq!(quote.low_price, dec!(145.26));
    assert_eq!(quote.last_price, Some(dec!(147.01)));
    assert!(quote.quote_time.is_some());
}

#[tokio::test]
async fn quote_without_symbol_entry_is_not_found() {
    let server = MockServer::start().await;
    let token = token_file();

    Mock::given(method("GET"))
        .and(path("/v1/marketdata/ZZZZ/quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = adapter(&server, &token)
        .get_quote(&Symbol::new("ZZZZ"))
        .await;

    assert!(matches!(result, Err(QuoteError::SymbolNotFound { .. })));
}

#[tokio::test]
async fn quote_server_error_is_unavailable() {
    let server = MockServer::start().await;
    let token = token_file();

    Mock::given(method("GET"))
        .and(path("/v1/marketdata/AAPL/quotes"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let result = adapter(&server, &token)
        .get_quote(&Symbol::new("AAPL"))
        .await;

    match result {
        Err(QuoteError::Unavailable { message }) => assert!(message.contains("503")),
        other => panic!("expected unavailable quote, got {other:?}"),
    }
}

#[tokio::test]
async fn quote_with_non_ok_success_status_is_unavailable() {
    let server = MockServer::start().await;
    let token = token_file();

    Mock::given(method("GET"))
        .and(path("/v1/marketdata/AAPL/quotes"))
        .respond_with(ResponseTemplate::new(203).set_body_json(json!({
            "AAPL": {"highPrice": 148.86, "lowPrice": 145.26}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = adapter(&server, &token)
        .get_quote(&Symbol::new("AAPL"))
        .await;

    match result {
        Err(QuoteError::Unavailable { message }) => assert!(message.contains("203")),
        other => panic!("expected unavailable quote, got {other:?}"),
    }
}

#[tokio::test]
async fn quote_with_garbage_body_is_malformed() {
    let server = MockServer::start().await;
    let token = token_file();

    Mock::given(method("GET"))
        .and(path("/v1/marketdata/AAPL/quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let result = adapter(&server, &token)
        .get_quote(&Symbol::new("AAPL"))
        .await;

    assert!(matches!(result, Err(QuoteError::Malformed { .. })));
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn order_created_returns_location_id() {
    let server = MockServer::start().await;
    let token = token_file();

    Mock::given(method("POST"))
        .and(path(format!("/v1/accounts/{ACCOUNT_ID}/orders")))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "orderType": "STOP",
            "session": "NORMAL",
            "duration": "DAY",
            "stopPrice": "101.00",
            "orderStrategyType": "TRIGGER",
            "orderLegCollection": [{
                "instruction": "BUY",
                "quantity": 50,
                "instrument": { "symbol": "AMD", "assetType": "EQUITY" }
            }]
        })))
        .respond_with(ResponseTemplate::new(201).insert_header(
            "Location",
            format!("https://api.tdameritrade.com/v1/accounts/{ACCOUNT_ID}/orders/4242").as_str(),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let confirmation = adapter(&server, &token)
        .submit_order(ACCOUNT_ID, &amd_bracket())
        .await
        .unwrap();

    assert_eq!(confirmation.status_code, 201);
    assert_eq!(confirmation.order_id.as_deref(), Some("4242"));
}

#[tokio::test]
async fn order_body_nests_three_oco_groups() {
    let server = MockServer::start().await;
    let token = token_file();

    Mock::given(method("POST"))
        .and(path(format!("/v1/accounts/{ACCOUNT_ID}/orders")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let confirmation = adapter(&server, &token)
        .submit_order(ACCOUNT_ID, &amd_bracket())
        .await
        .unwrap();
    assert_eq!(confirmation.status_code, 200);
    assert!(confirmation.order_id.is_none());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    let children = body["childOrderStrategies"].as_array().unwrap();
    assert_eq!(children.len(), 3);
    for (oco, (target, shares)) in children
        .iter()
        .zip([("102.00", 16), ("103.00", 16), ("104.00", 18)])
    {
        assert_eq!(oco["orderStrategyType"], "OCO");
        let legs = oco["childOrderStrategies"].as_array().unwrap();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0]["orderType"], "LIMIT");
        assert_eq!(legs[0]["price"], target);
        assert_eq!(legs[0]["duration"], "GOOD_TILL_CANCEL");
        assert_eq!(legs[0]["orderLegCollection"][0]["quantity"], shares);
        assert_eq!(legs[1]["orderType"], "STOP");
        assert_eq!(legs[1]["stopPrice"], "100.00");
        assert_eq!(legs[1]["orderLegCollection"][0]["instruction"], "SELL");
    }
}

#[tokio::test]
async fn order_body_sends_stop_triggers_as_sized() {
    let server = MockServer::start().await;
    let token = token_file();

    Mock::given(method("POST"))
        .and(path(format!("/v1/accounts/{ACCOUNT_ID}/orders")))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let size = PositionSizer::default()
        .size(&RiskParameters::new(dec!(148.869), dec!(145.261), dec!(50)))
        .unwrap();
    let order = BracketOrderBuilder::default()
        .build(Symbol::new("AAPL"), &size, dec!(148.869), dec!(145.261))
        .unwrap();

    adapter(&server, &token)
        .submit_order(ACCOUNT_ID, &order)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    assert_eq!(body["stopPrice"], "148.869");
    let legs = body["childOrderStrategies"][0]["childOrderStrategies"]
        .as_array()
        .unwrap();
    assert_eq!(legs[0]["price"], "152.47");
    assert_eq!(legs[1]["stopPrice"], "145.261");
}

#[tokio::test]
async fn order_rejection_carries_payload() {
    let server = MockServer::start().await;
    let token = token_file();

    Mock::given(method("POST"))
        .and(path(format!("/v1/accounts/{ACCOUNT_ID}/orders")))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"error":"Order quantity exceeds buying power"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = adapter(&server, &token)
        .submit_order(ACCOUNT_ID, &amd_bracket())
        .await;

    match result {
        Err(SubmissionError::Rejected { status, payload }) => {
            assert_eq!(status, 400);
            assert!(payload.contains("buying power"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn other_success_codes_are_rejections() {
    let server = MockServer::start().await;
    let token = token_file();

    Mock::given(method("POST"))
        .and(path(format!("/v1/accounts/{ACCOUNT_ID}/orders")))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let result = adapter(&server, &token)
        .submit_order(ACCOUNT_ID, &amd_bracket())
        .await;

    assert!(matches!(
        result,
        Err(SubmissionError::Rejected { status: 202, .. })
    ));
}

#[tokio::test]
async fn expired_token_is_unauthorized() {
    let server = MockServer::start().await;
    let token = token_file();

    Mock::given(method("POST"))
        .and(path(format!("/v1/accounts/{ACCOUNT_ID}/orders")))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"Not Authorized"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let result = adapter(&server, &token)
        .submit_order(ACCOUNT_ID, &amd_bracket())
        .await;

    assert!(matches!(result, Err(SubmissionError::Unauthorized { .. })));
}

#[tokio::test]
async fn missing_token_file_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let config = TdaConfig::new(
        "CLIENTID".to_string(),
        ACCOUNT_ID.to_string(),
        "/nonexistent/tda-token.json",
    )
    .with_base_url(server.uri());
    let adapter = TdaBrokerAdapter::new(&config).unwrap();

    let result = adapter.submit_order(ACCOUNT_ID, &amd_bracket()).await;

    assert!(matches!(result, Err(SubmissionError::Unauthorized { .. })));
}
