//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::composition::EchoScreeningComposition;
use crate::inbound::http::fallback::not_found;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::json::DEFAULT_JSON_LIMIT;
use crate::inbound::http::routes;
use crate::inbound::http::state::HttpState;

/// Build an application wired like production but backed by the echo
/// composition.
pub fn test_app(
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app_with_state(
        health_state,
        web::Data::new(HttpState::new(Arc::new(EchoScreeningComposition))),
    )
}

/// Build an application around caller-supplied HTTP state.
pub fn test_app_with_state(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(|cfg| routes::configure(cfg, DEFAULT_JSON_LIMIT))
        .default_service(web::to(not_found))
}
