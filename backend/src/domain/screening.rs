//! Screening use-case.
//!
//! [`ScreeningUsecase`] orchestrates a single screening: it forwards content
//! to the bound [`ScreeningService`] exactly once and returns the result
//! untouched. Cross-cutting behaviour that must not alter the result lives
//! here.

use std::sync::Arc;

use tracing::debug;

use crate::domain::TraceId;
use crate::domain::ports::{ScreeningCommand, ScreeningService};

/// Orchestration wrapper over a screening capability.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use screening_backend::domain::ScreeningUsecase;
/// use screening_backend::domain::ports::{ScreeningCommand, ScreeningService};
///
/// struct Upper;
///
/// impl ScreeningService for Upper {
///     fn screen(&self, content: String) -> String {
///         content.to_uppercase()
///     }
/// }
///
/// let usecase = ScreeningUsecase::new(Arc::new(Upper));
/// assert_eq!(usecase.execute("job ad".to_owned()), "JOB AD");
/// ```
pub struct ScreeningUsecase<S: ?Sized> {
    service: Arc<S>,
}

impl<S: ?Sized> ScreeningUsecase<S> {
    /// Create a use-case bound to `service`.
    pub const fn new(service: Arc<S>) -> Self {
        Self { service }
    }
}

impl<S: ?Sized> Clone for ScreeningUsecase<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S> ScreeningCommand for ScreeningUsecase<S>
where
    S: ScreeningService + ?Sized,
{
    fn execute(&self, content: String) -> String {
        let input_len = content.len();
        let screened = self.service.screen(content);
        debug!(
            trace_id = TraceId::current().map(tracing::field::display),
            input_len,
            output_len = screened.len(),
            "screening executed"
        );
        screened
    }
}
