//! `VariableQuery` over a real MySQL connection.

use super::VariableQuery;
use crate::dsn::{Address, Dsn};
use crate::errors::{connection_error, query_error, timeout_error, Result};
use cnfdiff_core::errors::{ExError, ExErrorKind};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::ConnectOptions;
use std::time::Duration;
use tokio::runtime::Runtime;

/// A single sqlx connection driven by its own current-thread runtime.
///
/// The rest of the tool is synchronous; the runtime lives exactly as long as
/// the connection.
pub struct MySqlVariableQuery {
    runtime: Runtime,
    conn: MySqlConnection,
    target: String,
}

impl MySqlVariableQuery {
    /// Open a connection, giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// - `Internal`: the runtime could not be built
    /// - `Connection`: the server refused or the handshake failed
    /// - `Timeout`: no connection within `timeout`
    pub fn connect(dsn: &Dsn, timeout: Duration) -> Result<Self> {
        let target = dsn.to_string();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                ExError::new(ExErrorKind::Internal)
                    .with_op("connect")
                    .with_message(format!("failed to create tokio runtime: {}", e))
            })?;

        let options = connect_options(dsn);
        let conn = runtime
            .block_on(async { tokio::time::timeout(timeout, options.connect()).await })
            .map_err(|_| timeout_error(&target, timeout.as_secs()))?
            .map_err(|e| connection_error(&target, e))?;

        tracing::debug!(target_dsn = %target, "connected");
        Ok(Self {
            runtime,
            conn,
            target,
        })
    }
}

impl VariableQuery for MySqlVariableQuery {
    fn show_variables(&mut self) -> Result<Vec<(String, Option<String>)>> {
        let conn = &mut self.conn;
        self.runtime
            .block_on(async {
                sqlx::query_as::<_, (String, Option<String>)>("SHOW VARIABLES")
                    .fetch_all(conn)
                    .await
            })
            .map_err(|e| query_error(&self.target, e))
    }
}

fn connect_options(dsn: &Dsn) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new();
    options = match &dsn.address {
        Address::Tcp { host, port } => options.host(host).port(*port),
        Address::Unix(path) => options.socket(path),
    };
    if let Some(user) = &dsn.user {
        options = options.username(user);
    }
    if let Some(password) = &dsn.password {
        options = options.password(password.expose());
    }
    if let Some(db) = &dsn.database {
        options = options.database(db);
    }
    options
}
