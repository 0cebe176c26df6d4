//! Logging setup for binaries and tests

pub mod logging;

pub use logging::{init_tracing, init_tracing_with_filter, LogFormat, LOG_FORMAT_ENV};
