//! Fallback handlers for unmatched paths and methods.

use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpRequest, HttpResponse, ResponseError, Route, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;

/// Build a route answering `405` with an `Allow` header listing `allow`.
///
/// Register it as a resource's default service so unmatched methods on a
/// known path produce the shared JSON error payload.
///
/// # Examples
/// ```
/// use actix_web::{HttpResponse, web};
/// use screening_backend::inbound::http::fallback::method_not_allowed;
///
/// let resource = web::resource("/ping")
///     .route(web::get().to(|| async { HttpResponse::Ok().finish() }))
///     .default_service(method_not_allowed("GET"));
/// ```
#[must_use]
pub fn method_not_allowed(allow: &'static str) -> Route {
    web::to(move |req: HttpRequest| async move {
        let error = Error::method_not_allowed(format!(
            "method {} is not allowed on {}",
            req.method(),
            req.path()
        ));
        let mut response = error.error_response();
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static(allow));
        response
    })
}

/// Answer unmatched paths with a `404` JSON error.
pub async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!("no route for {}", req.path())))
}
