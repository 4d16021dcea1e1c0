use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Body of the envelope sent whenever the aggregator cannot be used.
pub const UPSTREAM_UNAVAILABLE: &str = "Unable to contact the API, please contact a developer.";

/// Failures on the path between the gateway and the aggregator.
///
/// Every variant surfaces to the browser as the same 500 envelope; the cause is
/// only logged.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("parse error: aggregator body is not json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("url error: {0}")]
    Url(String),
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().json(json!({ "error": UPSTREAM_UNAVAILABLE }))
    }
}

/// Anything that stops the process from reaching the point of accepting connections.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("country data error: {0}")]
    Registry(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("aggregator client error: {0}")]
    Aggregator(#[from] GatewayError),
    #[cfg(feature = "sqlite")]
    #[error("db error: {0}")]
    Db(#[from] rusqlite::Error),
}

impl From<String> for StartupError {
    fn from(e: String) -> Self {
        Self::Config(e)
    }
}
