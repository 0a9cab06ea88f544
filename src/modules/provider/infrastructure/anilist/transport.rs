//! GraphQL transport
//!
//! Executes one operation per call against the configured endpoint and hands
//! back the raw `data` object. GraphQL errors, HTTP failures and malformed
//! bodies all surface as `AppError`s carrying the original message.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::dto::{GraphQlRequest, GraphQlResponse};
use crate::shared::{
    config::AniListConfig,
    errors::{AppError, AppResult},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Execute the operation and return its `data` object
    async fn execute(&self, request: GraphQlRequest) -> AppResult<Value>;
}

/// HTTP transport backed by a shared `reqwest` client
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &AniListConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                AppError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphQlTransport for HttpTransport {
    async fn execute(&self, request: GraphQlRequest) -> AppResult<Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        interpret_response(status, &body)
    }
}

/// Outcome of one HTTP exchange.
///
/// GraphQL `errors` win whatever the status; otherwise a non-success status is
/// a transport failure even when the body parses.
pub fn interpret_response(status: StatusCode, body: &str) -> AppResult<Value> {
    match serde_json::from_str::<GraphQlResponse<Value>>(body) {
        Ok(parsed) => {
            let has_errors = parsed.errors.as_ref().is_some_and(|e| !e.is_empty());
            if !has_errors && !status.is_success() {
                return Err(http_failure(status));
            }
            into_data(parsed)
        }
        Err(_) if !status.is_success() => Err(http_failure(status)),
        Err(e) => Err(AppError::SerializationError(format!(
            "Failed to parse AniList response: {}",
            e
        ))),
    }
}

fn http_failure(status: StatusCode) -> AppError {
    AppError::ExternalServiceError(format!("AniList returned HTTP {}", status))
}

/// Unwrap a GraphQL envelope into its `data` object
pub fn into_data(response: GraphQlResponse<Value>) -> AppResult<Value> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(AppError::ApiError(messages.join(", ")));
    }

    match response.data {
        Some(Value::Null) | None => Err(AppError::ApiError(
            "AniList response contained no data".to_string(),
        )),
        Some(data) => Ok(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GraphQlResponse<Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_errors_take_precedence() {
        let result = into_data(parse(
            r#"{ "data": null, "errors": [ { "message": "Not Found.", "status": 404 }, { "message": "Second" } ] }"#,
        ));
        assert_eq!(result, Err(AppError::ApiError("Not Found., Second".into())));
    }

    #[test]
    fn test_missing_data() {
        let result = into_data(parse(r#"{ "data": null }"#));
        assert!(matches!(result, Err(AppError::ApiError(_))));
    }

    #[test]
    fn test_data_is_returned() {
        let data = into_data(parse(r#"{ "data": { "Page": null }, "errors": [] }"#)).unwrap();
        assert!(data.get("Page").is_some());
    }

    #[test]
    fn test_failed_status_without_graphql_errors() {
        for body in [r#"{ "data": null }"#, "{}", "<html>Service Unavailable</html>"] {
            let result = interpret_response(StatusCode::SERVICE_UNAVAILABLE, body);
            assert_eq!(
                result,
                Err(AppError::ExternalServiceError(
                    "AniList returned HTTP 503 Service Unavailable".into()
                )),
                "body {}",
                body
            );
        }
    }

    #[test]
    fn test_failed_status_keeps_graphql_message() {
        let result = interpret_response(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{ "data": null, "errors": [ { "message": "Too Many Requests.", "status": 429 } ] }"#,
        );
        assert_eq!(result, Err(AppError::ApiError("Too Many Requests.".into())));
    }

    #[test]
    fn test_success_status() {
        let data = interpret_response(StatusCode::OK, r#"{ "data": { "Page": null } }"#).unwrap();
        assert!(data.get("Page").is_some());

        let result = interpret_response(StatusCode::OK, "not json");
        assert!(matches!(result, Err(AppError::SerializationError(_))));
    }

    #[test]
    fn test_http_transport_uses_configured_endpoint() {
        let config = AniListConfig {
            endpoint: "http://localhost:4000/graphql".to_string(),
            ..Default::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:4000/graphql");
    }
}
