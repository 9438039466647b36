//! cnfdiff Sources - adapters that build `ConfigSource`s
//!
//! Provides:
//! - MySQL option-file reader (`[mysqld]` group by default)
//! - DSN parsing, go-mysql-driver style with a legacy `h=,P=,u=` fallback
//! - Live-server reader over the `VariableQuery` seam, with a sqlx MySQL backend
//! - The loader that reads every input and orders the result for the diff engine
//!
//! Every adapter either returns a complete source or an `ExError`; nothing
//! partial reaches the core.

pub mod cnf;
pub mod dsn;
pub mod errors;
pub mod live;
pub mod loader;

// Re-export key types
pub use dsn::Dsn;
pub use errors::Result;
pub use live::VariableQuery;
pub use loader::{load_sources, Connector, LoadOptions, MySqlConnector, SourceSpec};
