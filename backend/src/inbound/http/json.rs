//! JSON extractor configuration.
//!
//! Every way a screening body can fail to become a [`ScreeningRequest`] is a
//! `422` validation failure carrying the shared error payload: a declared
//! non-JSON media type, malformed JSON, or the wrong shape. A body sent with
//! no `Content-Type` is read as JSON. The only other body failure is `413`,
//! and only when an operator sets a size cap.
//!
//! [`ScreeningRequest`]: crate::inbound::http::screenings::ScreeningRequest

use actix_web::dev::ServiceRequest;
use actix_web::error::JsonPayloadError;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpRequest, web};
use serde_json::error::Category;
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Body limit used when none is configured: bodies are not capped.
pub const DEFAULT_JSON_LIMIT: usize = usize::MAX;

/// Build the JSON extractor configuration for screening requests.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use screening_backend::inbound::http::json::{json_config, DEFAULT_JSON_LIMIT};
///
/// let app = App::new().app_data(json_config(DEFAULT_JSON_LIMIT));
/// ```
#[must_use]
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req: &HttpRequest| {
            debug!(error = %err, path = %req.path(), "rejected JSON payload");
            map_json_error(&err).into()
        })
}

/// Label a request that carries no `Content-Type` as JSON.
///
/// The extractor still rejects a declared non-JSON type; only an absent
/// header is defaulted.
#[must_use]
pub fn assume_json_body(mut req: ServiceRequest) -> ServiceRequest {
    if !req.headers().contains_key(header::CONTENT_TYPE) {
        req.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
    }
    req
}

const fn category_label(category: Category) -> &'static str {
    match category {
        Category::Io => "io",
        Category::Syntax => "syntax",
        Category::Data => "data",
        Category::Eof => "eof",
    }
}

/// Translate an extractor failure into the shared error payload.
pub(crate) fn map_json_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::ContentType => {
            Error::validation_failed("request body must be JSON").with_details(json!({
                "reason": "declared content type is not JSON",
                "category": "content_type",
            }))
        }
        JsonPayloadError::OverflowKnownLength { length, limit } => {
            Error::payload_too_large("request body exceeds the configured limit")
                .with_details(json!({ "length": length, "limit": limit }))
        }
        JsonPayloadError::Overflow { limit } => {
            Error::payload_too_large("request body exceeds the configured limit")
                .with_details(json!({ "limit": limit }))
        }
        JsonPayloadError::Deserialize(source) => Error::validation_failed(format!(
            "request body failed validation: {source}"
        ))
        .with_details(json!({
            "reason": source.to_string(),
            "category": category_label(source.classify()),
            "line": source.line(),
            "column": source.column(),
        })),
        JsonPayloadError::Payload(source) => {
            Error::invalid_request(format!("failed to read request body: {source}"))
        }
        other => Error::internal(format!("unexpected JSON payload failure: {other}")),
    }
}
