use crate::routes::AppError;
use axum::extract::FromRequest;
use std::str::FromStr;

/// `axum::Json` whose rejection is an [`AppError`], so a malformed body gets
/// the same `{"error": ...}` shape as every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Parses a typed id, answering 400 with `message` when it is malformed.
pub fn parse_id<I: FromStr>(raw: &str, message: &str) -> Result<I, AppError> {
    raw.parse().map_err(|_| AppError::bad_request(message))
}

/// Like [`parse_id`], but a missing or blank value gets its own message.
pub fn require_id<I: FromStr>(raw: Option<&str>, missing: &str, invalid: &str) -> Result<I, AppError> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => parse_id(raw, invalid),
        None => Err(AppError::bad_request(missing)),
    }
}
