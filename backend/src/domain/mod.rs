//! Domain primitives, ports, and the screening use-case.
//!
//! Purpose: hold the framework-agnostic core of the service. Inbound
//! adapters call into the domain through driving ports; the domain calls
//! out through driven ports that outbound adapters implement.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - TraceId: request correlation identifier.
//! - ScreeningUsecase: orchestration wrapper over a screening capability.

pub mod error;
pub mod ports;
pub mod screening;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::screening::ScreeningUsecase;
pub use self::trace_id::TraceId;
