//! API-level errors and the JSON body they render to.

use axum::{
  Json,
  http::{StatusCode, Uri},
  response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

// ─── Error Body ──────────────────────────────────────────────────────────────

/// The JSON body attached to every error response.
///
/// `details` identifies the request that failed, so a client juggling
/// several calls can attribute the error without correlating logs.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
  pub timestamp: DateTime<Utc>,
  pub message:   String,
  pub details:   String,
}

// ─── ApiError ────────────────────────────────────────────────────────────────

/// An error produced while serving an employee request.
///
/// `NotFound` and `BadRequest` are expected outcomes and carry a
/// client-facing message verbatim. `Store` wraps whatever the backing store
/// failed with; the message still reaches the client, but the full source
/// chain is only logged.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{message}")]
  NotFound { message: String, details: String },
  #[error("{message}")]
  BadRequest { message: String, details: String },
  #[error("store error: {source}")]
  Store {
    source:  Box<dyn std::error::Error + Send + Sync>,
    details: String,
  },
}

impl ApiError {
  pub fn not_found(message: impl Into<String>, uri: &Uri) -> Self {
    Self::NotFound {
      message: message.into(),
      details: request_details(uri),
    }
  }

  pub fn bad_request(message: impl Into<String>, uri: &Uri) -> Self {
    Self::BadRequest {
      message: message.into(),
      details: request_details(uri),
    }
  }

  pub fn store(
    source: impl std::error::Error + Send + Sync + 'static,
    uri: &Uri,
  ) -> Self {
    Self::Store {
      source:  Box::new(source),
      details: request_details(uri),
    }
  }
}

fn request_details(uri: &Uri) -> String { format!("uri={}", uri.path()) }

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message, details) = match self {
      ApiError::NotFound { message, details } => {
        (StatusCode::NOT_FOUND, message, details)
      }
      ApiError::BadRequest { message, details } => {
        (StatusCode::BAD_REQUEST, message, details)
      }
      ApiError::Store { source, details } => {
        tracing::error!(%details, "store error: {source}");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          format!("store error: {source}"),
          details,
        )
      }
    };

    let body = ErrorMessage {
      timestamp: Utc::now(),
      message,
      details,
    };
    (status, Json(body)).into_response()
  }
}
