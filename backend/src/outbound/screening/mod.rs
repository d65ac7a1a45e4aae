//! Screening capability adapters.

mod echo;

pub use echo::EchoScreeningService;
