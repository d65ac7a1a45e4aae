//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (screenings, health)
//! - **Schemas**: request/response bodies plus domain type wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated document is served at `GET /openapi.json`, rendered by
//! Swagger UI (`/docs/`) and ReDoc (`/redoc`), and exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::screenings::{ScreeningRequest, ScreeningResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Screening API",
        version = "1.0.0",
        description = "Content screening service. Requests flow through four layers: \
            the HTTP transport, an orchestration use-case, a screening capability port, \
            and its concrete implementation (currently an echo).",
        contact(name = "Screening API Team"),
        license(name = "Internal Use")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::screenings::create_screening,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ScreeningRequest,
        ScreeningResponse,
        HealthStatus,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "screenings", description = "Content screening operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
