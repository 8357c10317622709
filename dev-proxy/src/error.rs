use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Missing required environment variable {0}")]
    MissingVar(String),

    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream request to {url} failed: {source}")]
    Upstream {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Static file error: {0}")]
    Static(#[from] std::io::Error),
}

impl ProxyError {
    pub fn invalid_var(name: &str, reason: impl ToString) -> Self {
        Self::InvalidVar {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Static(_) => StatusCode::NOT_FOUND,
            ProxyError::MissingVar(_) | ProxyError::InvalidVar { .. } | ProxyError::Client(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
