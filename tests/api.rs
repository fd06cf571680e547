//! Runs the client against a local HTTP server and checks what reaches the wire.

use std::error::Error as _;
use std::io::Read;
use std::sync::mpsc;
use std::thread;

use chrono::NaiveDate;
use debit_card_client::{ApiConfig, AppError, CardDto, DebitCardClient};
use tiny_http::{Response, Server};

const AUTH_KEY: &str = "5d41402abc4b2a76b9719d911017c592";

#[derive(Debug)]
struct Recorded {
    method: String,
    url: String,
    auth_key: Option<String>,
    body: String,
}

/// Serve `count` requests, answering `/fail` paths with 500 and everything
/// else with `reply`.
fn serve(count: usize, reply: &'static str) -> (String, mpsc::Receiver<Recorded>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for _ in 0..count {
            let mut request = server.recv().unwrap();
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();

            let auth_key = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("AUTH-KEY"))
                .map(|h| h.value.as_str().to_string());
            let recorded = Recorded {
                method: request.method().to_string(),
                url: request.url().to_string(),
                auth_key,
                body,
            };

            let status: u16 = match recorded.url.contains("/fail") {
                true => 500,
                false => 200,
            };
            tx.send(recorded).unwrap();
            request
                .respond(Response::from_string(reply).with_status_code(status))
                .unwrap();
        }
    });

    (format!("http://{}/api", addr), rx)
}

fn client(base_url: &str) -> DebitCardClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::new(AUTH_KEY)
    };
    DebitCardClient::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_requests_carry_auth_header_and_body() {
    let (base_url, rx) = serve(4, "{\"status\":\"ok\"}");
    let client = client(&base_url);

    let body = client.get_card_balance(42).await.unwrap();
    assert_eq!(body, "{\"status\":\"ok\"}");
    let recorded = rx.recv().unwrap();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.url, "/api/cards/42/balance");
    assert_eq!(recorded.auth_key.as_deref(), Some(AUTH_KEY));
    assert!(recorded.body.is_empty());

    let card = CardDto::new("Vadim", "Shevchenko", "EUR", "1234");
    client.create_card(&card).await.unwrap();
    let recorded = rx.recv().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.url, "/api/cards/create");
    assert_eq!(recorded.auth_key.as_deref(), Some(AUTH_KEY));
    let json: serde_json::Value = serde_json::from_str(&recorded.body).unwrap();
    assert_eq!(json["firstName"], "Vadim");
    assert_eq!(json["lastName"], "Shevchenko");
    assert_eq!(json["currency"], "EUR");
    assert_eq!(json["pin"], "1234");

    client.update_card_pin(1, "4321").await.unwrap();
    let recorded = rx.recv().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.url, "/api/cards/1/update");
    assert_eq!(recorded.auth_key.as_deref(), Some(AUTH_KEY));
    assert_eq!(recorded.body, "4321");

    client.load_card_balance(1, "1000").await.unwrap();
    let recorded = rx.recv().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.url, "/api/cards/1/load");
    assert_eq!(recorded.auth_key.as_deref(), Some(AUTH_KEY));
    assert_eq!(recorded.body, "1000");
}

#[tokio::test]
async fn test_history_query_and_countries() {
    let (base_url, rx) = serve(3, "[]");
    let client = client(&base_url);

    let from = NaiveDate::from_ymd_opt(2025, 1, 1);
    let to = NaiveDate::from_ymd_opt(2025, 1, 8);
    client.get_card_history(9, from, to).await.unwrap();
    let recorded = rx.recv().unwrap();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.url, "/api/cards/9/history?from=2025-01-01&to=2025-01-08");

    assert_eq!(client.get_countries().await.unwrap(), "[]");
    let recorded = rx.recv().unwrap();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.url, "/api/countries");
    assert_eq!(recorded.auth_key.as_deref(), Some(AUTH_KEY));

    client.get_country(1).await.unwrap();
    assert_eq!(rx.recv().unwrap().url, "/api/countries/1");
}

#[tokio::test]
async fn test_error_status_is_wrapped() {
    let (base_url, rx) = serve(1, "boom");
    let client = client(&format!("{}/fail", base_url));

    let err = client.get_card_by_id(1).await.unwrap_err();
    assert_eq!(rx.recv().unwrap().url, "/api/fail/cards/1");

    assert!(matches!(err, AppError::Request { .. }));
    let source = err.source().unwrap();
    let reqwest_err = source.downcast_ref::<reqwest::Error>().unwrap();
    assert_eq!(reqwest_err.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn test_connection_refused_is_wrapped() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{}/api/", addr));
    let err = client.get_countries().await.unwrap_err();

    match &err {
        AppError::Request { message, .. } => assert!(!message.is_empty()),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.source().unwrap().downcast_ref::<reqwest::Error>().is_some());
}
