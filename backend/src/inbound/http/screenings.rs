//! Screening API handlers.
//!
//! ```text
//! POST /v1/screenings  Screen submitted content
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Screening request body. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ScreeningRequest {
    /// Text to screen. May be empty.
    #[schema(example = "この求人は素晴らしい機会です。")]
    pub content: String,
}

/// Screening result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ScreeningResponse {
    /// Screened text.
    #[schema(example = "この求人は素晴らしい機会です。")]
    pub content: String,
}

/// Screen the submitted content and return the result.
#[utoipa::path(
    post,
    path = "/v1/screenings",
    tags = ["screenings"],
    request_body = ScreeningRequest,
    responses(
        (status = 200, description = "Screened content", body = ScreeningResponse),
        (status = 405, description = "Method not allowed; only POST is supported", body = ErrorSchema),
        (status = 413, description = "Request body exceeds the configured `SCREENING_MAX_BODY_BYTES`", body = ErrorSchema),
        (status = 422, description = "Request body is not a JSON object with a string `content`", body = ErrorSchema)
    )
)]
pub async fn create_screening(
    state: web::Data<HttpState>,
    payload: web::Json<ScreeningRequest>,
) -> ApiResult<web::Json<ScreeningResponse>> {
    let ScreeningRequest { content } = payload.into_inner();
    let command = state.screenings.screening_command();
    Ok(web::Json(ScreeningResponse {
        content: command.execute(content),
    }))
}
