//! Observability setup.
//!
//! - [`init`]: tracing subscriber initialization

pub mod init;

pub use init::init_tracing;
