//! Tracing/logging setup shared by cartkit binaries.

pub mod subscriber;

pub use subscriber::{LogFormat, ObservabilityConfig, init};
