//! # palate-observability
//!
//! Structured logging for the palate engine: a subscriber installer driven
//! by [`ObservabilityConfig`](palate_core::config::ObservabilityConfig) and
//! span macros for the learning, similarity, and recommendation paths.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, try_init_tracing};
