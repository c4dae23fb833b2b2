use std::fmt;

use reqwest::{header, Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

use crate::{
    config::ClientConfig,
    error::{ReGraphError, Result},
    logger::RequestTimer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// Shared HTTP plumbing used by every resource client.
#[derive(Clone)]
pub struct Transport {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Transport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(ReGraphError::missing_api_key)?;

        let client = Client::builder()
            .timeout(config.resolved_timeout())
            .build()
            .map_err(|e| ReGraphError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.resolved_base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins base URL, path and query. Query values are not percent-encoded.
    pub fn build_url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let query_string = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query_string);
        }
        url
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &[(String, String)],
    ) -> Result<Value> {
        let url = self.build_url(path, query);
        let timer = RequestTimer::start(format!("{} {}", method, path));

        let mut builder = self
            .client
            .request(method.as_reqwest(), &url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            log::trace!("[req:{}] payload: {}", timer.request_id(), body);
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("[req:{}] {} {} failed: {}", timer.request_id(), method, url, e);
                timer.finish(None);
                return Err(connection_error(&e));
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                timer.finish(Some(status.as_u16()));
                return Err(connection_error(&e));
            }
        };
        timer.finish(Some(status.as_u16()));

        if !status.is_success() {
            let (message, parsed) = error_details(status, &text);
            log::warn!("{} {} returned {}: {}", method, path, status.as_u16(), message);
            return Err(ReGraphError::from_status(status.as_u16(), message, parsed));
        }

        if text.trim().is_empty() {
            return Ok(json!({}));
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Sends a request and decodes the response into `T`.
    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(String, String)],
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        let value = self.request(method, path, body.as_ref(), query).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> Result<T> {
        self.send::<Value, T>(Method::Get, path, None, query).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::Post, path, Some(body), &[]).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send::<Value, T>(Method::Delete, path, None, &[]).await
    }
}

fn connection_error(e: &reqwest::Error) -> ReGraphError {
    if e.is_timeout() {
        ReGraphError::connection("Request timeout")
    } else {
        ReGraphError::connection(format!("Connection error: {}", e))
    }
}

/// Extracts a message from an error body: `error.message`, then a string
/// `error`, then the raw text, then a generic status line.
fn error_details(status: StatusCode, body: &str) -> (String, Option<Value>) {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    let from_json = parsed.as_ref().and_then(|value| {
        let error = value.get("error")?;
        error
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| error.as_str())
            .map(str::to_string)
    });

    let message = from_json
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Error")
            )
        });

    (message, parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> Transport {
        Transport::new(
            &ClientConfig::new()
                .with_api_key("rg-test")
                .with_base_url("http://localhost:9/v1/"),
        )
        .unwrap()
    }

    #[test]
    fn test_missing_api_key() {
        let err = Transport::new(&ClientConfig::new()).unwrap_err();
        assert!(err.is_authentication());

        let err = Transport::new(&ClientConfig::new().with_api_key("")).unwrap_err();
        assert_eq!(err.message(), "API key is required");
    }

    #[test]
    fn test_build_url() {
        let transport = transport();
        assert_eq!(transport.build_url("/status", &[]), "http://localhost:9/v1/status");

        let query = vec![
            ("start_date".to_string(), "2024-01-01".to_string()),
            ("end_date".to_string(), "2024-01-31".to_string()),
        ];
        assert_eq!(
            transport.build_url("/usage", &query),
            "http://localhost:9/v1/usage?start_date=2024-01-01&end_date=2024-01-31"
        );
    }

    #[test]
    fn test_error_details_nested_message() {
        let (message, parsed) =
            error_details(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":{"message":"boom"}}"#);
        assert_eq!(message, "boom");
        assert!(parsed.is_some());
    }

    #[test]
    fn test_error_details_fallbacks() {
        let (message, _) = error_details(StatusCode::BAD_REQUEST, r#"{"error":"bad input"}"#);
        assert_eq!(message, "bad input");

        let (message, parsed) = error_details(StatusCode::BAD_GATEWAY, "upstream unavailable");
        assert_eq!(message, "upstream unavailable");
        assert!(parsed.is_none());

        let (message, _) = error_details(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(message, "HTTP 503 Service Unavailable");

        let (message, _) = error_details(StatusCode::NOT_FOUND, r#"{"detail":"nope"}"#);
        assert_eq!(message, r#"{"detail":"nope"}"#);
    }
}
