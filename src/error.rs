use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReGraphError {
    #[error("Authentication error: {message}")]
    Authentication {
        message: String,
        status_code: Option<u16>,
        response: Option<Value>,
    },

    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        status_code: Option<u16>,
        response: Option<Value>,
    },

    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
        response: Option<Value>,
    },

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ReGraphError {
    pub(crate) fn missing_api_key() -> Self {
        ReGraphError::Authentication {
            message: "API key is required".to_string(),
            status_code: None,
            response: None,
        }
    }

    /// Builds the typed error for a non-2xx response.
    pub(crate) fn from_status(status: u16, message: String, response: Option<Value>) -> Self {
        let status_code = Some(status);
        match status {
            401 => ReGraphError::Authentication {
                message,
                status_code,
                response,
            },
            429 => ReGraphError::RateLimit {
                message,
                status_code,
                response,
            },
            _ => ReGraphError::Api {
                message,
                status_code,
                response,
            },
        }
    }

    pub(crate) fn connection(message: impl Into<String>) -> Self {
        ReGraphError::Api {
            message: message.into(),
            status_code: None,
            response: None,
        }
    }

    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            ReGraphError::Authentication { message, .. }
            | ReGraphError::RateLimit { message, .. }
            | ReGraphError::Api { message, .. } => message.clone(),
            ReGraphError::NotSupported(msg)
            | ReGraphError::Config(msg)
            | ReGraphError::Decode(msg) => msg.clone(),
            ReGraphError::Serialization(e) => e.to_string(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ReGraphError::Authentication { status_code, .. }
            | ReGraphError::RateLimit { status_code, .. }
            | ReGraphError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// Parsed JSON error body, when the server sent one.
    pub fn response(&self) -> Option<&Value> {
        match self {
            ReGraphError::Authentication { response, .. }
            | ReGraphError::RateLimit { response, .. }
            | ReGraphError::Api { response, .. } => response.as_ref(),
            _ => None,
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, ReGraphError::Authentication { .. })
    }

    pub fn is_rate_limit(&self) -> bool {
        matches!(self, ReGraphError::RateLimit { .. })
    }
}

pub type Result<T> = std::result::Result<T, ReGraphError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        assert!(ReGraphError::from_status(401, "bad key".into(), None).is_authentication());
        assert!(ReGraphError::from_status(429, "slow down".into(), None).is_rate_limit());

        let err = ReGraphError::from_status(503, "down".into(), Some(json!({"error": "down"})));
        assert!(matches!(err, ReGraphError::Api { .. }));
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(err.response(), Some(&json!({"error": "down"})));
        assert_eq!(err.message(), "down");
    }

    #[test]
    fn test_display() {
        let err = ReGraphError::missing_api_key();
        assert_eq!(err.to_string(), "Authentication error: API key is required");
        assert_eq!(err.status_code(), None);

        let err = ReGraphError::NotSupported("streaming".into());
        assert_eq!(err.to_string(), "Not supported: streaming");
    }
}
