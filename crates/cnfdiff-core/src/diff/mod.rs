//! Configuration diff engine.
//!
//! Compares an ordered list of configuration sources against the first one
//! (the baseline) and reports every key whose normalized value differs or
//! whose presence differs in a way the asymmetry rule does not excuse.
//!
//! ## Entry point
//!
//! ```
//! use cnfdiff_core::diff::compare;
//! use cnfdiff_core::ConfigSource;
//!
//! let file = ConfigSource::file("my.cnf", [("max_connections", "100")]);
//! let live = ConfigSource::live("db1", [("max_connections", "151"), ("port", "3306")]);
//! let diff = compare(&[file, live]);
//! assert_eq!(diff.len(), 1);
//! ```
//!
//! ## Guarantees
//!
//! - **Pure**: no I/O, no errors; fewer than two sources yields an empty diff.
//! - **Meaning-based equality**: values are normalized before comparison.
//! - **Asymmetry**: keys a live server enumerates but a file never sets are
//!   not reported when the two sides differ in kind.
//! - **Determinism**: rows are keyed in a `BTreeMap`.

pub mod engine;
pub mod model;

pub use engine::compare;
pub use model::{ConfigDiff, Slot, MISSING};
