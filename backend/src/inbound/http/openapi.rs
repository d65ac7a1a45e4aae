//! Serve the generated OpenAPI document and its browsable renderings.
//!
//! ```text
//! GET /openapi.json  OpenAPI 3.1 document for this service
//! GET /docs          Redirect to /docs/
//! GET /docs/         Swagger UI reading /openapi.json
//! GET /redoc         ReDoc page with the document embedded
//! ```

use actix_web::web;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::{Config, SwaggerUi};

use crate::doc::ApiDoc;

/// Path of the machine-readable document.
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// Return the OpenAPI document describing every public route.
pub async fn openapi_json() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}

/// Register the Swagger UI and ReDoc pages on `cfg`.
///
/// Swagger UI loads the document from [`OPENAPI_JSON_PATH`] rather than
/// registering a second copy of it.
pub fn configure_docs(cfg: &mut web::ServiceConfig) {
    cfg.service(web::redirect("/docs", "/docs/").permanent())
        .service(SwaggerUi::new("/docs/{_:.*}").config(Config::from(OPENAPI_JSON_PATH)))
        .service(Redoc::with_url("/redoc", ApiDoc::openapi()));
}
