//! Shared utilities for fairroll.

pub mod logging;

pub use logging::{init_logging, LogFormat, UnknownLogFormat};
