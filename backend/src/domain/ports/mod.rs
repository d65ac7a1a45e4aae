//! Domain ports for the hexagonal boundary.
//!
//! Driving ports are called by inbound adapters; driven ports are
//! implemented by outbound adapters and bound by the composition root.

mod screening_command;
mod screening_service;

pub use screening_command::{ScreeningCommand, ScreeningCommandFactory};
#[cfg(test)]
pub use screening_service::MockScreeningService;
pub use screening_service::ScreeningService;
