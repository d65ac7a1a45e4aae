//! Screening backend library modules.
//!
//! Layers, leaf-first: [`domain`] holds the screening capability port and the
//! orchestration use-case, [`outbound`] implements the capability,
//! [`composition`] binds the two, and [`inbound`] exposes them over HTTP.

pub mod composition;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
