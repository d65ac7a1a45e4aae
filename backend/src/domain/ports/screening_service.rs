//! Driven port for the screening capability.
//!
//! Concrete screening strategies live in outbound adapters and are bound to
//! this trait by the composition root.

/// Capability contract: transform submitted content into screened content.
///
/// Implementations must be side-effect free from the caller's perspective and
/// safe to share across request workers. The operation has no failure mode.
#[cfg_attr(test, mockall::automock)]
pub trait ScreeningService: Send + Sync {
    /// Screen `content` and return the result.
    fn screen(&self, content: String) -> String;
}
