//! Core types shared across cnfdiff facilities
//!
//! This crate provides foundational types used by the error, logging and
//! adapter layers:
//!
//! - **Correlation types**: RunId
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RunId;
pub use sensitive::Sensitive;
