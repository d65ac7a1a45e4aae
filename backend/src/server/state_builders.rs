//! Builders for HTTP state.

use std::sync::Arc;

use actix_web::web;

use screening_backend::composition::EchoScreeningComposition;
use screening_backend::inbound::http::state::HttpState;

/// Bind the screening driving port to the echo composition.
pub(super) fn build_http_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(EchoScreeningComposition)))
}
