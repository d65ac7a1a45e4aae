//! HTTP contract tests: identity, idempotence, body handling, documentation
//! pages, and behaviour under concurrent load.

#[expect(
    dead_code,
    reason = "Shared harness exposes helpers used only by the behaviour suite."
)]
#[path = "support/http_app.rs"]
mod http_app;

use std::sync::Arc;

use actix_web::http::header;
use actix_web::test;
use futures::future::join_all;
use http_app::{app_with, capture, echo_app};
use rstest::rstest;
use screening_backend::composition::EchoScreeningComposition;
use serde_json::{Value, json};

fn screening_request(content: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/v1/screenings")
        .set_json(json!({ "content": content }))
}

#[rstest]
#[case::ascii("hello")]
#[case::empty("")]
#[case::multi_line("first\nsecond\n\nfourth")]
#[case::mixed_script("応募者のテキスト情報 and English 텍스트")]
#[case::control_characters("\u{1}\u{1b}[31m\t\r\n")]
#[case::emoji("🧪🔍✅ 👩‍💻")]
#[case::surrounding_whitespace("  padded  ")]
#[actix_rt::test]
async fn screening_returns_content_verbatim(#[case] content: &str) {
    let app = test::init_service(echo_app()).await;
    let res = test::call_service(&app, screening_request(content).to_request()).await;
    let captured = capture(res).await;
    assert_eq!(captured.status, 200);
    assert_eq!(captured.body, Some(json!({ "content": content })));
}

#[rstest]
#[actix_rt::test]
async fn repeated_requests_yield_identical_responses() {
    let app = test::init_service(echo_app()).await;
    let mut bodies = Vec::new();
    for _ in 0..5 {
        let res = test::call_service(&app, screening_request("same input").to_request()).await;
        bodies.push(capture(res).await.body);
    }
    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(bodies[0], Some(json!({ "content": "same input" })));
}

#[rstest]
#[actix_rt::test]
async fn concurrent_requests_do_not_interfere() {
    let app = test::init_service(echo_app()).await;
    let requests = (0..32).map(|i| {
        let req = screening_request(&format!("request {i}")).to_request();
        let app = &app;
        async move { (i, capture(test::call_service(app, req).await).await) }
    });
    for (i, captured) in join_all(requests).await {
        assert_eq!(captured.status, 200);
        assert_eq!(captured.body, Some(json!({ "content": format!("request {i}") })));
    }
}

#[rstest]
#[actix_rt::test]
async fn health_is_stable_under_load_and_after_screenings() {
    let app = test::init_service(echo_app()).await;
    let _ = test::call_service(&app, screening_request("warm up").to_request()).await;

    let probes = (0..16).map(|i| {
        let req = test::TestRequest::get()
            .uri(&format!("/health?attempt={i}"))
            .to_request();
        let app = &app;
        async move { capture(test::call_service(app, req).await).await }
    });
    for captured in join_all(probes).await {
        assert_eq!(captured.status, 200);
        assert_eq!(captured.body, Some(json!({ "status": "ok" })));
    }
}

#[rstest]
#[actix_rt::test]
async fn trace_ids_are_unique_per_request() {
    let app = test::init_service(echo_app()).await;
    let first = capture(
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await,
    )
    .await;
    let second = capture(
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await,
    )
    .await;
    assert!(first.trace_id.is_some());
    assert_ne!(first.trace_id, second.trace_id);
}

#[rstest]
#[actix_rt::test]
async fn oversized_bodies_are_rejected() {
    let app = test::init_service(app_with(Arc::new(EchoScreeningComposition), 64)).await;
    let res = test::call_service(
        &app,
        screening_request(&"x".repeat(256)).to_request(),
    )
    .await;
    let captured = capture(res).await;
    assert_eq!(captured.status, 413);
    let body = captured.body.expect("error body");
    assert_eq!(body["code"], "payload_too_large");
    assert_eq!(body["details"]["limit"], 64);
}

#[rstest]
#[actix_rt::test]
async fn bodies_larger_than_two_mebibytes_are_echoed_by_default() {
    let content = "x".repeat(3 * 1024 * 1024);
    let app = test::init_service(echo_app()).await;
    let res = test::call_service(&app, screening_request(&content).to_request()).await;
    let captured = capture(res).await;
    assert_eq!(captured.status, 200);
    assert_eq!(
        captured.body.as_ref().and_then(|b| b["content"].as_str()),
        Some(content.as_str())
    );
}

#[rstest]
#[case::form("application/x-www-form-urlencoded", "content=test")]
#[case::text("text/plain", "{\"content\":\"hello\"}")]
#[actix_rt::test]
async fn non_json_bodies_fail_validation(#[case] content_type: &str, #[case] payload: &str) {
    let app = test::init_service(echo_app()).await;
    let req = test::TestRequest::post()
        .uri("/v1/screenings")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(payload.to_owned())
        .to_request();
    let captured = capture(test::call_service(&app, req).await).await;
    assert_eq!(captured.status, 422);
    assert_eq!(
        captured.body.as_ref().map(|b| b["code"].clone()),
        Some(Value::from("validation_failed"))
    );
}

#[rstest]
#[actix_rt::test]
async fn bodies_without_content_type_are_screened() {
    let app = test::init_service(echo_app()).await;
    let req = test::TestRequest::post()
        .uri("/v1/screenings")
        .set_payload("{\"content\":\"hi\"}")
        .to_request();
    let captured = capture(test::call_service(&app, req).await).await;
    assert_eq!(captured.status, 200);
    assert_eq!(captured.body, Some(json!({ "content": "hi" })));
}

#[rstest]
#[actix_rt::test]
async fn openapi_document_is_served() {
    let app = test::init_service(echo_app()).await;
    let req = test::TestRequest::get().uri("/openapi.json").to_request();
    let captured = capture(test::call_service(&app, req).await).await;
    assert_eq!(captured.status, 200);
    let doc = captured.body.expect("document body");
    assert!(doc.get("openapi").is_some());
    assert!(doc["paths"].get("/v1/screenings").is_some());
}

#[rstest]
#[case::swagger_ui("/docs/")]
#[case::redoc("/redoc")]
#[actix_rt::test]
async fn documentation_pages_are_served(#[case] path: &str) {
    let app = test::init_service(echo_app()).await;
    let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
    assert_eq!(res.status().as_u16(), 200, "GET {path}");
    assert!(res.headers().contains_key("trace-id"));
}
