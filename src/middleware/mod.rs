//! Middleware for the CaseLink API
//!
//! Only request tracing lives here. There is deliberately no auth
//! middleware: no route is gated on login state (see DESIGN.md).

mod tracing;

pub use tracing::request_tracing;
