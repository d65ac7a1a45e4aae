//! Composition root binding the screening capability to its implementation.
//!
//! This is the only module allowed to see both the domain ports and the
//! outbound adapters. Inbound handlers receive a [`ScreeningCommandFactory`]
//! and never name a concrete service.

use std::sync::Arc;

use crate::domain::ScreeningUsecase;
use crate::domain::ports::{ScreeningCommand, ScreeningCommandFactory};
use crate::outbound::screening::EchoScreeningService;

/// Build a freshly wired screening use-case backed by the echo adapter.
///
/// # Examples
/// ```
/// use screening_backend::composition::screening_usecase;
/// use screening_backend::domain::ports::ScreeningCommand;
///
/// assert_eq!(screening_usecase().execute("hello".to_owned()), "hello");
/// ```
#[must_use]
pub fn screening_usecase() -> ScreeningUsecase<EchoScreeningService> {
    ScreeningUsecase::new(Arc::new(EchoScreeningService))
}

/// Factory composing a new echo-backed use-case for every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoScreeningComposition;

impl ScreeningCommandFactory for EchoScreeningComposition {
    fn screening_command(&self) -> Box<dyn ScreeningCommand> {
        Box::new(screening_usecase())
    }
}
