//! Outbound adapters implementing domain driven ports.
//!
//! Adapters here depend on the domain, never on inbound transports.

pub mod screening;
