//! Logging utilities.
//!
//! The engine logs through the `log` facade only; this module owns the one
//! place a backend (`env_logger`) is installed. Nothing here is required —
//! embedders with their own logger can skip it entirely.

mod init;

pub use init::init_logging;
