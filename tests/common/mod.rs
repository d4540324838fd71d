//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use rsa::RsaPrivateKey;
use walmart_io::{ApiEndpoint, ConsumerId, WalmartConfig, WalmartConfigBuilder, WalmartIo};

pub const CONSUMER_ID: &str = "a1b2c3d4-0000-1111-2222-333344445555";
pub const API_BASE: &str = "/api-proxy/service/affil/product/v2";

/// Returns a PKCS#8 PEM test key, generated once per test binary.
pub fn test_key_pem() -> &'static str {
    static PEM: OnceLock<String> = OnceLock::new();
    PEM.get_or_init(|| {
        let key = RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap();
        key.to_pkcs8_pem(LineEnding::LF).unwrap().to_string()
    })
}

/// Returns the full mock path of an endpoint, e.g. `api_path("search")`.
pub fn api_path(endpoint: &str) -> String {
    format!("{API_BASE}/{endpoint}")
}

/// A builder pointing at the mock server, with a test identity.
pub fn builder_for(server_uri: &str) -> WalmartConfigBuilder {
    WalmartConfig::builder()
        .consumer_id(ConsumerId::new(CONSUMER_ID).unwrap())
        .private_key_pem(test_key_pem())
        .endpoint(ApiEndpoint::new(format!("{server_uri}/api-proxy/service")).unwrap())
}

/// A client pointing at the mock server with default settings.
pub fn client_for(server_uri: &str) -> WalmartIo {
    WalmartIo::new(builder_for(server_uri).build().unwrap())
}

/// Returns `count` distinct item ids.
pub fn item_ids(count: usize) -> Vec<String> {
    (1..=count).map(|id| (1000 + id).to_string()).collect()
}

/// Builds an items body echoing the given ids.
pub fn items_body(ids: &[String]) -> serde_json::Value {
    let items: Vec<_> = ids
        .iter()
        .map(|id| serde_json::json!({"itemId": id.parse::<i64>().unwrap(), "name": format!("Item {id}")}))
        .collect();
    serde_json::json!({ "items": items })
}
