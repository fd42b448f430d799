//! Reqwest-backed registration submitter.
//!
//! This adapter owns transport details only: payload serialisation, request
//! timeout, HTTP error mapping, and JSON decoding into the created-user echo.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use super::dto::CreatedUserDto;
use crate::domain::ports::{SubmissionError, SubmittedUser, UserSubmitter};
use crate::domain::values::FormValues;

const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users/";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = "onboarding-form/0.1";

/// Endpoint and outbound identity settings for the registration client.
#[derive(Debug, Clone)]
pub struct RegistrationConfig {
    /// Endpoint the values are POSTed to.
    pub endpoint: Url,
    /// Whole-request timeout applied by the HTTP client. The original
    /// configured none; an explicit bound is kinder to the single await the
    /// caller sits on.
    pub request_timeout: Duration,
    /// HTTP user-agent sent with every submission.
    pub user_agent: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

fn default_endpoint() -> Url {
    // The literal is a valid absolute URL; parsing it cannot fail.
    Url::parse(DEFAULT_ENDPOINT)
        .unwrap_or_else(|error| panic!("default endpoint failed to parse: {error}"))
}

/// Submitter that POSTs form values to one fixed endpoint.
pub struct RegistrationHttpClient {
    client: Client,
    endpoint: Url,
}

impl RegistrationHttpClient {
    /// Build a submitter for an explicit endpoint and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_config(RegistrationConfig {
            endpoint,
            request_timeout: timeout,
            ..RegistrationConfig::default()
        })
    }

    /// Build a submitter from full configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_config(config: RegistrationConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }
}

#[async_trait]
impl UserSubmitter for RegistrationHttpClient {
    async fn submit(&self, values: &FormValues) -> Result<SubmittedUser, SubmissionError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(values)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_created_user(body.as_ref())
    }
}

fn parse_created_user(body: &[u8]) -> Result<SubmittedUser, SubmissionError> {
    let decoded: CreatedUserDto = serde_json::from_slice(body).map_err(|error| {
        SubmissionError::decode(format!("invalid created-user JSON payload: {error}"))
    })?;
    decoded.into_submitted_user().map_err(SubmissionError::decode)
}

fn map_transport_error(error: reqwest::Error) -> SubmissionError {
    if error.is_timeout() {
        SubmissionError::timeout(error.to_string())
    } else {
        SubmissionError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SubmissionError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            SubmissionError::timeout(message)
        }
        _ => SubmissionError::rejected(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network mapping helpers.

    use super::*;
    use crate::domain::ports::RecordId;
    use rstest::rstest;

    #[test]
    fn the_default_config_targets_the_public_mock_endpoint() {
        let config = RegistrationConfig::default();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT)]
    fn timeout_statuses_map_to_timeout_errors(#[case] status: StatusCode) {
        let error = map_status_error(status, b"");
        assert!(
            matches!(error, SubmissionError::Timeout { .. }),
            "{status} should map to Timeout"
        );
    }

    #[rstest]
    #[case::bad_request(StatusCode::BAD_REQUEST)]
    #[case::unauthorized(StatusCode::UNAUTHORIZED)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR)]
    fn other_failure_statuses_map_to_rejected(#[case] status: StatusCode) {
        let error = map_status_error(status, b"{\"error\":\"nope\"}");
        match error {
            SubmissionError::Rejected { status: code, message } => {
                assert_eq!(code, status.as_u16());
                assert!(message.contains("nope"), "preview should carry the body");
            }
            other => panic!("{status} should map to Rejected, got {other:?}"),
        }
    }

    #[test]
    fn long_bodies_are_truncated_in_the_preview() {
        let body = "x".repeat(500);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 123);
    }

    #[test]
    fn parses_the_created_user_echo_with_a_string_id() {
        let body = br#"{
            "id": "387",
            "name": "Ann",
            "email": "ann@x.com",
            "password": "secret1",
            "confirmPassword": "secret1",
            "country": "United States",
            "state": "",
            "acceptTerms": true,
            "createdAt": "2020-02-20T20:20:20.200Z"
        }"#;

        let user = parse_created_user(body).expect("echo should decode");
        assert_eq!(user.id, RecordId::from("387"));
        assert_eq!(user.record.email, "ann@x.com");
    }

    #[test]
    fn parses_the_created_user_echo_with_a_numeric_id() {
        let body = br#"{ "id": 1, "name": "Ann", "email": "ann@x.com" }"#;
        let user = parse_created_user(body).expect("echo should decode");
        assert_eq!(user.id, RecordId::from(1));
        assert_eq!(user.record.name, "Ann");
        // Fields the server did not echo fall back to defaults.
        assert_eq!(user.record.country, "United States");
    }

    #[test]
    fn responses_without_an_id_map_to_decode_errors() {
        let body = br#"{ "name": "Ann" }"#;
        let error = parse_created_user(body).expect_err("decode should fail");
        assert!(matches!(error, SubmissionError::Decode { .. }));
    }

    #[test]
    fn invalid_json_maps_to_decode_errors() {
        let error = parse_created_user(b"<html>gateway</html>").expect_err("decode should fail");
        assert!(matches!(error, SubmissionError::Decode { .. }));
    }
}
