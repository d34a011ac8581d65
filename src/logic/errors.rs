use anyhow::Error;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    BadRequest,   // HTTP 400 (e.g. already running / nothing to stop)
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    Decode,       // Body was not a valid status document
    NetworkError, // DNS, routing, etc.
    Other,
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    if let Some(api_err) = error.downcast_ref::<ApiError>() {
        return match api_err.status_code() {
            400 => ErrorType::BadRequest,
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        };
    }

    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if reqwest_err.is_decode() {
                return ErrorType::Decode;
            }
        }
        if cause.is::<serde_json::Error>() {
            return ErrorType::Decode;
        }
    }

    // Fall back to the rendered chain; reqwest hides the io error kind
    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Most informative message for the error: server detail, reqwest error, or root cause
pub fn format_error_message(error: &Error) -> String {
    if let Some(api_err) = error.downcast_ref::<ApiError>() {
        return api_err.detail().to_string();
    }

    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
    }

    error.root_cause().to_string()
}
