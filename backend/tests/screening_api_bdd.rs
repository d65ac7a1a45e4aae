//! Behaviour tests for the public screening API.
//!
//! Each scenario assembles the application in-process and drives it with
//! Actix's test utilities, so routing, extractor errors, and fallbacks all
//! behave as they do behind a real listener.

#[expect(
    dead_code,
    reason = "Shared harness exposes helpers used only by the contract suite."
)]
#[path = "support/http_app.rs"]
mod http_app;

use std::sync::{Arc, Mutex};

use actix_web::http::Method;
use actix_web::test::TestRequest;
use http_app::{CapturedResponse, send_blocking};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use screening_backend::composition::EchoScreeningComposition;
use screening_backend::domain::ports::{ScreeningCommand, ScreeningCommandFactory};
use serde_json::Value;

struct Uppercase;

impl ScreeningCommand for Uppercase {
    fn execute(&self, content: String) -> String {
        content.to_uppercase()
    }
}

struct UppercaseComposition;

impl ScreeningCommandFactory for UppercaseComposition {
    fn screening_command(&self) -> Box<dyn ScreeningCommand> {
        Box::new(Uppercase)
    }
}

struct ScreeningWorld {
    factory: Arc<dyn ScreeningCommandFactory>,
    response: Option<CapturedResponse>,
}

impl ScreeningWorld {
    fn response(&self) -> &CapturedResponse {
        self.response.as_ref().expect("a request should have been sent")
    }

    fn body(&self) -> &Value {
        self.response()
            .body
            .as_ref()
            .expect("response body should be JSON")
    }
}

#[fixture]
fn world() -> Mutex<ScreeningWorld> {
    Mutex::new(ScreeningWorld {
        factory: Arc::new(EchoScreeningComposition),
        response: None,
    })
}

fn send(world: &Mutex<ScreeningWorld>, request: TestRequest) {
    let mut world = world.lock().expect("world lock");
    world.response = Some(send_blocking(Arc::clone(&world.factory), request));
}

#[given("the screening API is running")]
fn the_screening_api_is_running(world: &Mutex<ScreeningWorld>) {
    world.lock().expect("world lock").factory = Arc::new(EchoScreeningComposition);
}

#[given("the screening API is bound to an uppercasing implementation")]
fn bound_to_uppercasing(world: &Mutex<ScreeningWorld>) {
    world.lock().expect("world lock").factory = Arc::new(UppercaseComposition);
}

#[when("the client sends {method} {path}")]
fn the_client_sends(world: &Mutex<ScreeningWorld>, method: String, path: String) {
    let method = Method::from_bytes(method.as_bytes()).expect("valid HTTP method");
    send(world, TestRequest::default().method(method).uri(&path));
}

#[when("the client posts {body} to {path}")]
fn the_client_posts(world: &Mutex<ScreeningWorld>, body: String, path: String) {
    let json: Value = serde_json::from_str(&body).expect("scenario body should be JSON");
    send(world, TestRequest::post().uri(&path).set_json(json));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &Mutex<ScreeningWorld>, status: u16) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.response().status, status);
    assert!(
        world.response().trace_id.is_some(),
        "every response should carry a trace-id header"
    );
}

#[then("the response body is {expected}")]
fn the_response_body_is(world: &Mutex<ScreeningWorld>, expected: String) {
    let expected: Value = serde_json::from_str(&expected).expect("expected body should be JSON");
    let world = world.lock().expect("world lock");
    assert_eq!(world.body(), &expected);
}

#[then("the response body has no {field} field")]
fn the_response_body_has_no_field(world: &Mutex<ScreeningWorld>, field: String) {
    let world = world.lock().expect("world lock");
    assert!(world.body().get(&field).is_none(), "{field} should be dropped");
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &Mutex<ScreeningWorld>, code: String) {
    let world = world.lock().expect("world lock");
    let body = world.body();
    assert_eq!(body["code"], code.as_str());
    assert_eq!(
        body["traceId"].as_str(),
        world.response().trace_id.as_deref(),
        "error payload should echo the trace-id header"
    );
}

#[then("the response allows {method}")]
fn the_response_allows(world: &Mutex<ScreeningWorld>, method: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.response().allow.as_deref(), Some(method.as_str()));
}

#[scenario(path = "tests/features/screening_api.feature", name = "Health check reports ok")]
fn health_check_reports_ok(world: Mutex<ScreeningWorld>) {
    drop(world);
}

#[scenario(path = "tests/features/screening_api.feature", name = "Screening echoes content")]
fn screening_echoes_content(world: Mutex<ScreeningWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/screening_api.feature",
    name = "Screening accepts empty content"
)]
fn screening_accepts_empty_content(world: Mutex<ScreeningWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/screening_api.feature",
    name = "Screening rejects a body without content"
)]
fn screening_rejects_a_body_without_content(world: Mutex<ScreeningWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/screening_api.feature",
    name = "Screening drops unknown fields"
)]
fn screening_drops_unknown_fields(world: Mutex<ScreeningWorld>) {
    drop(world);
}

#[scenario(path = "tests/features/screening_api.feature", name = "Health rejects PUT")]
fn health_rejects_put(world: Mutex<ScreeningWorld>) {
    drop(world);
}

#[scenario(path = "tests/features/screening_api.feature", name = "Screening rejects GET")]
fn screening_rejects_get(world: Mutex<ScreeningWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/screening_api.feature",
    name = "Screening rejects a null content value"
)]
fn screening_rejects_a_null_content_value(world: Mutex<ScreeningWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/screening_api.feature",
    name = "Screening rejects numeric content"
)]
fn screening_rejects_numeric_content(world: Mutex<ScreeningWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/screening_api.feature",
    name = "Unknown paths return not found"
)]
fn unknown_paths_return_not_found(world: Mutex<ScreeningWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/screening_api.feature",
    name = "Screening uses the bound implementation"
)]
fn screening_uses_the_bound_implementation(world: Mutex<ScreeningWorld>) {
    drop(world);
}
