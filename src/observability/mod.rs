//! Logging and diagnostics.

pub mod logging;

pub use logging::{LogFormat, init_logging, verbosity_to_directive};
