//! Classification of completed HTTP exchanges into presentable outcomes.
//!
//! The backend's failure encodings differ per endpoint and per deployment:
//! some routes return `{message}`, some `{errors: {...}}`, some nothing at
//! all. [`classify`] absorbs that variance with a fixed, first-match-wins
//! decision order and always produces exactly one [`Classified`] value. The
//! caller surfaces it, typically via [`crate::notify::Notifications::report`].

pub mod validation;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub use validation::{FieldErrors, extract_field_errors};

/// Header carrying the backend's request correlation identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const GENERIC_SERVER_MESSAGE: &str = "Something went wrong on the server. Try again later.";
const GENERIC_VALIDATION_MESSAGE: &str = "Some fields need attention.";
const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Sign in again.";
const FORBIDDEN_MESSAGE: &str = "You do not have permission to perform this action.";
const NOT_FOUND_MESSAGE: &str = "The requested record was not found.";
const PAYLOAD_TOO_LARGE_MESSAGE: &str = "The uploaded file is too large.";
const CREATED_MESSAGE: &str = "Record created.";
const NO_CONTENT_MESSAGE: &str = "No content.";
const OK_MESSAGE: &str = "Operation completed successfully.";

/// A completed HTTP exchange as surfaced by the transport collaborator.
///
/// Every field is optional: a network-level failure has no status at all,
/// and many error responses ship without a body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResponse {
    /// HTTP status code, absent when the exchange never completed.
    pub status: Option<u16>,
    /// Response headers, keyed as received.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Parsed response body, when one was received.
    pub data: Option<Value>,
}

/// Why a request was rejected as a client error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientReason {
    /// 400/422: the submitted data failed validation.
    Validation,
    /// 401: the session is no longer valid.
    SessionExpired,
    /// 403: authenticated but not permitted.
    Forbidden,
    /// 404: the addressed record does not exist.
    NotFound,
    /// 413: the request body exceeded the backend's limit.
    PayloadTooLarge,
}

/// Why a response was classified as a server-side failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerReason {
    /// 5xx, or the exchange never completed.
    Internal,
    /// A status outside every recognized range.
    Unclassified,
}

/// The closed set of outcomes a classified exchange can take.
///
/// ## Invariants
/// - Exactly one variant is populated per value.
/// - `code` is always present; `field_errors` and `request_id` only carry
///   meaning on their respective variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Classified {
    /// The exchange succeeded.
    Success {
        /// HTTP status code.
        code: u16,
        /// Status-specific acknowledgement message.
        message: String,
    },
    /// The request was rejected and the user can act on it.
    ClientError {
        /// HTTP status code.
        code: u16,
        /// Rejection category.
        reason: ClientReason,
        /// Human-facing message.
        message: String,
        /// Per-field validation messages, when the body carried them.
        #[serde(skip_serializing_if = "Option::is_none")]
        field_errors: Option<FieldErrors>,
    },
    /// The backend failed or never answered.
    ServerError {
        /// HTTP status code (500 when the exchange never completed).
        code: u16,
        /// Failure category.
        reason: ServerReason,
        /// Human-facing message.
        message: String,
        /// Correlation identifier for support, when the backend sent one.
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    },
}

impl Classified {
    /// HTTP status code the classification was derived from.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Success { code, .. }
            | Self::ClientError { code, .. }
            | Self::ServerError { code, .. } => *code,
        }
    }

    /// Human-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. }
            | Self::ClientError { message, .. }
            | Self::ServerError { message, .. } => message,
        }
    }

    /// Per-field validation messages, if this is a validation rejection.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::ClientError { field_errors, .. } => field_errors.as_ref(),
            _ => None,
        }
    }

    /// Correlation identifier, if this is a server failure carrying one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ServerError { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Whether the exchange succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Classify a completed exchange. Total over every (status, body, headers)
/// combination; never panics, always returns exactly one variant.
///
/// Decision order, first match wins:
/// 1. absent status or 5xx → server error
/// 2. 400/422 → validation, with field errors when extractable
/// 3. 401 → session expired; 4. 403 → forbidden; 5. 404 → not found;
/// 6. 413 → payload too large; 7. 200/201/204 → success;
/// 8. anything else → unclassified server error carrying the raw status.
#[must_use]
pub fn classify(response: &RawResponse) -> Classified {
    match response.status {
        None => server_error(500, ServerReason::Internal, response),
        Some(code) if code >= 500 => server_error(code, ServerReason::Internal, response),
        Some(code @ (400 | 422)) => Classified::ClientError {
            code,
            reason: ClientReason::Validation,
            message: body_message(response).unwrap_or_else(|| GENERIC_VALIDATION_MESSAGE.to_owned()),
            field_errors: response.data.as_ref().and_then(extract_field_errors),
        },
        Some(401) => client_error(401, ClientReason::SessionExpired, SESSION_EXPIRED_MESSAGE),
        Some(403) => client_error(403, ClientReason::Forbidden, FORBIDDEN_MESSAGE),
        Some(404) => client_error(404, ClientReason::NotFound, NOT_FOUND_MESSAGE),
        Some(413) => client_error(413, ClientReason::PayloadTooLarge, PAYLOAD_TOO_LARGE_MESSAGE),
        Some(code @ (200 | 201 | 204)) => Classified::Success {
            code,
            message: match code {
                201 => CREATED_MESSAGE,
                204 => NO_CONTENT_MESSAGE,
                _ => OK_MESSAGE,
            }
            .to_owned(),
        },
        Some(code) => {
            debug!(status = code, "unclassified response status");
            Classified::ServerError {
                code,
                reason: ServerReason::Unclassified,
                message: format!("Unexpected response from the server (status {code})."),
                request_id: request_id(response),
            }
        }
    }
}

fn client_error(code: u16, reason: ClientReason, message: &str) -> Classified {
    Classified::ClientError {
        code,
        reason,
        message: message.to_owned(),
        field_errors: None,
    }
}

fn server_error(code: u16, reason: ServerReason, response: &RawResponse) -> Classified {
    Classified::ServerError {
        code,
        reason,
        message: body_message(response).unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_owned()),
        request_id: request_id(response),
    }
}

fn body_message(response: &RawResponse) -> Option<String> {
    response
        .data
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Correlation identifier: the `x-request-id` header (header names are
/// case-insensitive on the wire) with the body's `requestId` as fallback.
fn request_id(response: &RawResponse) -> Option<String> {
    response
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(REQUEST_ID_HEADER))
        .map(|(_, value)| value.clone())
        .or_else(|| {
            response
                .data
                .as_ref()
                .and_then(|body| body.get("requestId"))
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
}
