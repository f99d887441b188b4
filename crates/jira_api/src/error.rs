//! Error model used by Jira API client operations.

use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JiraError>;

/// Failure of a single Jira request: an error status with the messages Jira put
/// in the body, rejected credentials, a timeout, a connection problem or an
/// undecodable payload.
#[derive(Debug, Error)]
pub enum JiraError {
    #[error("http {status}: {}", .messages.join("; "))]
    Http {
        status: StatusCode,
        messages: Vec<String>,
    },
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl JiraError {
    /// Builds an HTTP error from a raw response body.
    ///
    /// Jira reports failures as `{"errorMessages": [...], "errors": {"field": "msg"}}`;
    /// anything else is kept verbatim.
    pub fn from_body(status: StatusCode, body: &str) -> Self {
        JiraError::Http {
            status,
            messages: extract_error_messages(body),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            JiraError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraErrorBody {
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

fn extract_error_messages(body: &str) -> Vec<String> {
    let trimmed = body.trim();
    if let Ok(parsed) = serde_json::from_str::<JiraErrorBody>(trimmed) {
        let mut messages = parsed.error_messages;
        messages.extend(
            parsed
                .errors
                .into_iter()
                .map(|(field, message)| format!("{field}: {message}")),
        );
        if !messages.is_empty() {
            return messages;
        }
    }
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![trimmed.to_string()]
    }
}

impl From<reqwest::Error> for JiraError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            JiraError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            JiraError::Http {
                status,
                messages: vec![err.to_string()],
            }
        } else if err.is_connect() {
            JiraError::Network(err.to_string())
        } else if err.is_decode() {
            JiraError::Serialization(err.to_string())
        } else {
            JiraError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for JiraError {
    fn from(err: serde_json::Error) -> Self {
        JiraError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jira_error_body_messages_are_collected() {
        let body = r#"{"errorMessages":["Issue does not exist"],"errors":{"timeSpent":"invalid"}}"#;
        let err = JiraError::from_body(StatusCode::BAD_REQUEST, body);
        match &err {
            JiraError::Http { status, messages } => {
                assert_eq!(*status, StatusCode::BAD_REQUEST);
                assert_eq!(
                    messages,
                    &vec![
                        "Issue does not exist".to_string(),
                        "timeSpent: invalid".to_string()
                    ]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "http 400 Bad Request: Issue does not exist; timeSpent: invalid"
        );
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        let err = JiraError::from_body(StatusCode::BAD_GATEWAY, "  upstream down ");
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert!(err.to_string().ends_with("upstream down"));

        let empty = JiraError::from_body(StatusCode::NOT_FOUND, "");
        assert!(matches!(empty, JiraError::Http { ref messages, .. } if messages.is_empty()));
    }
}
