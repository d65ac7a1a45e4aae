//! Route table for the HTTP adapter.
//!
//! ```text
//! GET  /health         Service status
//! GET  /health/ready   Readiness probe
//! GET  /health/live    Liveness probe
//! POST /v1/screenings  Screen submitted content
//! GET  /openapi.json   OpenAPI document
//! GET  /docs/          Swagger UI
//! GET  /redoc          ReDoc
//! ```
//!
//! Every API resource answers unmatched methods with `405`; paths outside this
//! table fall through to the application's `404` default service.

use actix_web::dev::Service as _;
use actix_web::web;

use crate::inbound::http::fallback::method_not_allowed;
use crate::inbound::http::health::{health, live, ready};
use crate::inbound::http::json::{assume_json_body, json_config};
use crate::inbound::http::openapi::{OPENAPI_JSON_PATH, configure_docs, openapi_json};
use crate::inbound::http::screenings::create_screening;

/// Register every HTTP resource on `cfg`.
///
/// `json_limit` bounds the accepted screening request body in bytes; pass
/// [`DEFAULT_JSON_LIMIT`](crate::inbound::http::json::DEFAULT_JSON_LIMIT) to
/// leave bodies uncapped.
pub fn configure(cfg: &mut web::ServiceConfig, json_limit: usize) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health))
            .default_service(method_not_allowed("GET")),
    )
    .service(
        web::resource("/health/ready")
            .route(web::get().to(ready))
            .default_service(method_not_allowed("GET")),
    )
    .service(
        web::resource("/health/live")
            .route(web::get().to(live))
            .default_service(method_not_allowed("GET")),
    )
    .service(
        web::resource("/v1/screenings")
            .app_data(json_config(json_limit))
            .route(web::post().to(create_screening))
            .default_service(method_not_allowed("POST"))
            .wrap_fn(|req, srv| srv.call(assume_json_body(req))),
    )
    .service(
        web::resource(OPENAPI_JSON_PATH)
            .route(web::get().to(openapi_json))
            .default_service(method_not_allowed("GET")),
    )
    .configure(configure_docs);
}
