//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::ScreeningCommandFactory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Produces one screening command per request.
    pub screenings: Arc<dyn ScreeningCommandFactory>,
}

impl HttpState {
    /// Construct state from a screening command factory.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use screening_backend::composition::EchoScreeningComposition;
    /// use screening_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(EchoScreeningComposition));
    /// let command = state.screenings.screening_command();
    /// assert_eq!(command.execute("hello".to_owned()), "hello");
    /// ```
    pub fn new(screenings: Arc<dyn ScreeningCommandFactory>) -> Self {
        Self { screenings }
    }
}
