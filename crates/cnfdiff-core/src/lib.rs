//! cnfdiff Core - configuration drift comparison kernel
//!
//! This crate provides the pure, I/O-free part of cnfdiff:
//! - `Value`, the opaque scalar held by every configuration entry
//! - The value normalizer pipeline (sizes, numbers, sets)
//! - `ConfigSource`, a uniform read-only view over a file or a live server
//! - The asymmetric diff engine and baseline ordering
//! - Plain and JSON renderers for the resulting diff
//! - The error and logging facilities shared with the adapter and CLI crates

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod normalize;
pub mod ordering;
pub mod render;
pub mod source;
pub mod value;

#[doc(hidden)]
pub use cnfdiff_core_types;

// Re-export commonly used types
pub use diff::{compare, ConfigDiff, Slot, MISSING};
pub use errors::{CnfDiffError, ExError, ExErrorKind, Result};
pub use normalize::normalize;
pub use ordering::{baseline_kind, order_sources};
pub use render::{render, OutputFormat};
pub use source::{ConfigSource, SourceKind};
pub use value::Value;
