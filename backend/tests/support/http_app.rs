//! In-process HTTP harness shared by the behaviour and contract suites.
//!
//! The application is assembled the same way the server binary does it, so
//! routing, extractor errors, fallbacks, and the trace middleware are all
//! exercised.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, test, web};
use screening_backend::Trace;
use screening_backend::composition::EchoScreeningComposition;
use screening_backend::domain::TRACE_ID_HEADER;
use screening_backend::domain::ports::ScreeningCommandFactory;
use screening_backend::inbound::http::fallback::not_found;
use screening_backend::inbound::http::health::HealthState;
use screening_backend::inbound::http::json::DEFAULT_JSON_LIMIT;
use screening_backend::inbound::http::routes;
use screening_backend::inbound::http::state::HttpState;
use serde_json::Value;

/// Response fields the suites assert on.
#[derive(Debug, Clone)]
pub(crate) struct CapturedResponse {
    pub(crate) status: u16,
    pub(crate) allow: Option<String>,
    pub(crate) trace_id: Option<String>,
    pub(crate) body: Option<Value>,
}

/// Build the application around `factory` with the given body limit.
pub(crate) fn app_with(
    factory: Arc<dyn ScreeningCommandFactory>,
    json_limit: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    App::new()
        .app_data(health_state)
        .app_data(web::Data::new(HttpState::new(factory)))
        .wrap(Trace)
        .configure(move |cfg| routes::configure(cfg, json_limit))
        .default_service(web::to(not_found))
}

/// Build the application with the production echo composition.
pub(crate) fn echo_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    app_with(Arc::new(EchoScreeningComposition), DEFAULT_JSON_LIMIT)
}

/// Read the parts of a response the suites care about.
pub(crate) async fn capture(res: ServiceResponse) -> CapturedResponse {
    let status = res.status().as_u16();
    let header_value = |name: &str| {
        res.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    let allow = header_value(header::ALLOW.as_str());
    let trace_id = header_value(TRACE_ID_HEADER);
    let bytes = test::read_body(res).await;
    let body = serde_json::from_slice(&bytes).ok();
    CapturedResponse {
        status,
        allow,
        trace_id,
        body,
    }
}

/// Drive one request through a fresh application on a dedicated Actix system.
pub(crate) fn send_blocking(
    factory: Arc<dyn ScreeningCommandFactory>,
    request: test::TestRequest,
) -> CapturedResponse {
    actix_rt::System::new().block_on(async move {
        let app = test::init_service(app_with(factory, DEFAULT_JSON_LIMIT)).await;
        let res = test::call_service(&app, request.to_request()).await;
        capture(res).await
    })
}
