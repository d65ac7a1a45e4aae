//! Driving port for screening use-cases.
//!
//! Inbound adapters call [`ScreeningCommand`] without knowing which
//! [`super::ScreeningService`] sits behind it. A [`ScreeningCommandFactory`]
//! hands out a freshly composed command per request.

/// Domain use-case port for running a screening.
pub trait ScreeningCommand: Send + Sync {
    /// Screen `content` and return the result verbatim.
    fn execute(&self, content: String) -> String;
}

/// Produces a fully wired [`ScreeningCommand`] for a single request.
pub trait ScreeningCommandFactory: Send + Sync {
    /// Build a new command instance. Construction cannot fail.
    fn screening_command(&self) -> Box<dyn ScreeningCommand>;
}
