#![forbid(unsafe_code)]

//! Core: geometry primitives, pointer events, and logging support.

pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
