//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing subsystem produces:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (registration and lookup counters)
//!
//! Consumers:
//!     → host process subscriber (stdout, file, remote)
//!     → host process metrics recorder (Prometheus, statsd, ...)
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing subscribers and recorders is the host's job
//! - `init_logging` is offered for binaries and tests that want the default setup
//! - Counters go through the `metrics` facade and cost nothing without a recorder

pub mod logging;
pub mod metrics;
