//! Fallback for unknown API paths.

use serde_json::Value;

use crate::error::AppError;

/// Answers `404` with a JSON error body for any unmatched `/api/*` path.
pub async fn api_not_found_handler() -> AppError {
    AppError::not_found("Not found", Value::Null)
}
