//! Shared helpers for infra integration tests

#![allow(dead_code)]

use ledgerbridge_domain::GatewayConfig;
use ledgerbridge_infra::integrations::merit::signing::sign;
use ledgerbridge_infra::AccountingClient;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const API_ID: &str = "670fe52f-558a-4be8-ade0-526e01a106d0";
pub const API_SECRET: &str = "secret-key-123";

/// Configuration pointing at the mock server's `/api/` prefix.
pub fn config_for(server: &MockServer) -> GatewayConfig {
    GatewayConfig::new(API_ID, API_SECRET).with_base_url(format!("{}/api", server.uri()))
}

/// Mock server plus a client wired to it.
pub async fn merit_server() -> (MockServer, AccountingClient) {
    let server = MockServer::start().await;
    let client = AccountingClient::new(config_for(&server)).expect("client should build");
    (server, client)
}

/// Answer POSTs to `endpoint` with `body` as JSON.
pub async fn respond_json(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/api/{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answer POSTs to `endpoint` with a bare status and text body.
pub async fn respond_status(server: &MockServer, endpoint: &str, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/api/{endpoint}")))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request.url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
}

/// JSON body of the only request received on `endpoint`.
pub async fn received_body(server: &MockServer, endpoint: &str) -> Value {
    let requests = server.received_requests().await.expect("request recording enabled");
    let wanted = format!("/api/{endpoint}");
    let request = requests
        .iter()
        .find(|request| request.url.path() == wanted)
        .unwrap_or_else(|| panic!("no request to {wanted}"));
    serde_json::from_slice(&request.body).expect("request body is JSON")
}

/// Whether the request's signature verifies against its own body.
pub fn signature_verifies(request: &Request) -> bool {
    let Some(timestamp) = query_value(request, "timestamp") else { return false };
    let Some(signature) = query_value(request, "signature") else { return false };
    sign(API_ID, API_SECRET, &timestamp, &request.body).is_ok_and(|expected| expected == signature)
}
