//! ReadyCloud HTTP client for API interactions

use log::{debug, error, warn};
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;

use crate::auth::Credential;
use crate::config::api;
use crate::error::{RcError, Result};

use super::record::{cell_value, Record};

/// ReadyCloud API client
pub struct RcClient {
    client: Client,
    token: String,
    endpoint: String,
}

impl RcClient {
    /// Create a new client for the endpoint and token of a credential
    pub fn new(credential: &Credential) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: credential.access_token.clone(),
            endpoint: credential.api_endpoint.clone(),
        }
    }

    /// Build the collection URL of a named resource
    pub(crate) fn resource_url(&self, name: &str) -> String {
        format!("{}{}/", self.endpoint, name)
    }

    /// GET a URL with the token and response format attached.
    ///
    /// A body that is not a JSON object (typically a revoked token) is
    /// logged and yields an empty mapping.
    pub async fn get_json(&self, url: &str) -> Result<Map<String, Value>> {
        let separator = if url.contains('?') { "&" } else { "?" };
        let full_url = format!(
            "{}{}{}={}&format={}",
            url,
            separator,
            api::TOKEN_PARAM,
            urlencoding::encode(&self.token),
            api::RESPONSE_FORMAT
        );

        debug!("Fetching {}", url);
        let response = self.client.get(&full_url).send().await?;
        debug!("Response status: {}", response.status());
        let body = response.text().await?;

        match parse_object(&body) {
            Ok(map) => Ok(map),
            Err(e) => {
                debug!("{}", e);
                error!(
                    "No data obtained. It may be that this application's access \
                     to the api has been revoked."
                );
                Ok(Map::new())
            }
        }
    }

    /// Log and reject an envelope that carries `error_message`
    pub fn check_result(&self, result: &Map<String, Value>) -> bool {
        match api_error(result) {
            Some(err) => {
                error!("{}", err);
                false
            }
            None => true,
        }
    }

    /// Fetch one collection and project each object onto `field_order`.
    ///
    /// Records come back in server order. An API error or a missing
    /// `envelope_field` gives an empty list; a [`RcError::FieldMismatch`]
    /// aborts the whole fetch.
    pub async fn fetch_resource(
        &self,
        name: &str,
        label: &str,
        envelope_field: &str,
        field_order: Option<&[&str]>,
    ) -> Result<Vec<Record>> {
        let url = self.resource_url(name);
        let mut result = self.get_json(&url).await?;

        if !self.check_result(&result) {
            return Ok(Vec::new());
        }

        let items = match result.remove(envelope_field) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                warn!(
                    "Expected a list under '{}' for {}, got: {}",
                    envelope_field, name, other
                );
                return Ok(Vec::new());
            }
            None => {
                debug!("No '{}' in response for {}", envelope_field, name);
                return Ok(Vec::new());
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Object(object) => records.push(Record::new(label, object, field_order)?),
                other => warn!("Skipping non-object {} entry: {}", label, other),
            }
        }

        debug!("Fetched {} {} record(s)", records.len(), label);
        Ok(records)
    }
}

/// Parse a response body that must be a JSON object
fn parse_object(body: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(map),
        other => Err(RcError::MalformedResponse(format!(
            "expected a JSON object, got: {}",
            other
        ))),
    }
}

/// The API error carried by an envelope, if any
fn api_error(result: &Map<String, Value>) -> Option<RcError> {
    result.get(api::ERROR_FIELD).map(|message| RcError::Api {
        message: cell_value(message),
    })
}

#[cfg(test)]
impl RcClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(&Credential {
            access_token: "test-token".to_string(),
            api_endpoint: crate::config::normalize_endpoint(base_url),
        })
    }
}


#[cfg(test)]
mod fetch_tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_json_sends_token_and_format() {
        let mock_server = MockServer::start().await;
        let client = RcClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/order/"))
            .and(query_param("bearer_token", "test-token"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "objects": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client
            .get_json(&client.resource_url("order"))
            .await
            .unwrap();
        assert!(result.contains_key("objects"));
    }

    #[tokio::test]
    async fn test_get_json_non_json_body_is_empty() {
        let mock_server = MockServer::start().await;
        let client = RcClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/order/"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&mock_server)
            .await;

        let result = client
            .get_json(&client.resource_url("order"))
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_get_json_empty_body_is_empty() {
        let mock_server = MockServer::start().await;
        let client = RcClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/order/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let result = client
            .get_json(&client.resource_url("order"))
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_resource_builds_records_in_order() {
        let mock_server = MockServer::start().await;
        let client = RcClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/order/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "objects": [
                    {"id": 3, "total": "1.00", "po_number": "A"},
                    {"id": 1, "total": "9.99", "po_number": "B"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let records = client
            .fetch_resource("order", "Order", "objects", Some(&["id", "total"]))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "Order: 3");
        assert_eq!(records[1].name(), "Order: 1");
        assert_eq!(records[1].to_row(), vec!["1", "9.99"]);
    }

    #[tokio::test]
    async fn test_fetch_resource_api_error_is_empty() {
        let mock_server = MockServer::start().await;
        let client = RcClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/order/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error_message": "revoked"
            })))
            .mount(&mock_server)
            .await;

        let records = client
            .fetch_resource("order", "Order", "objects", None)
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_resource_missing_envelope_field_is_empty() {
        let mock_server = MockServer::start().await;
        let client = RcClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/order/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "meta": {"total_count": 0}
            })))
            .mount(&mock_server)
            .await;

        let records = client
            .fetch_resource("order", "Order", "objects", None)
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_resource_custom_envelope_field() {
        let mock_server = MockServer::start().await;
        let client = RcClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/order/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{"id": 5}]
            })))
            .mount(&mock_server)
            .await;

        let records = client
            .fetch_resource("order", "Order", "results", None)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Order: 5");
    }

    #[tokio::test]
    async fn test_fetch_resource_skips_non_objects() {
        let mock_server = MockServer::start().await;
        let client = RcClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/order/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "objects": [42, {"id": 2}]
            })))
            .mount(&mock_server)
            .await;

        let records = client
            .fetch_resource("order", "Order", "objects", None)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_resource_field_mismatch_aborts() {
        let mock_server = MockServer::start().await;
        let client = RcClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/order/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "objects": [{"id": 1, "total": "9.99"}, {"id": 2}]
            })))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_resource("order", "Order", "objects", Some(&["id", "total"]))
            .await;

        match result {
            Err(RcError::FieldMismatch { missing, .. }) => {
                assert_eq!(missing, vec!["total".to_string()])
            }
            other => panic!("Expected FieldMismatch, got {:?}", other),
        }
    }
}
