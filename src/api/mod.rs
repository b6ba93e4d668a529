//! Transport-neutral HTTP API.
//!
//! [`Api::handle`] maps a method, path, query and body to a status code and
//! a body. The CLI's server adapts it to `tiny_http`; tests call it
//! directly.

mod handlers;
mod query;

pub use handlers::Api;
pub use query::Query;

use serde::Serialize;

/// Request method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other(String),
}

impl Method {
    /// Parse a method name, case-insensitively.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            other => Method::Other(other.to_string()),
        }
    }
}

/// An incoming request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Query,
    pub body: String,
}

impl ApiRequest {
    /// Create a request from a method, a URL path with optional query, and
    /// a body.
    pub fn new(method: Method, url: &str, body: impl Into<String>) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        Self {
            method,
            path: path.to_string(),
            query: Query::parse(query),
            body: body.into(),
        }
    }

    /// Create a GET request.
    pub fn get(url: &str) -> Self {
        Self::new(Method::Get, url, "")
    }

    /// Create a POST request with a body.
    pub fn post(url: &str, body: impl Into<String>) -> Self {
        Self::new(Method::Post, url, body)
    }
}

/// A response ready to be written by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl ApiResponse {
    /// A JSON response.
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                content_type: "application/json",
                body,
            },
            Err(e) => {
                log::error!("response serialization failed: {}", e);
                Self::error(500, "Internal error")
            }
        }
    }

    /// An HTML response.
    pub fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    /// A JSON `{"error": message}` response.
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }

    /// Check for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
