//! Turn operator inputs into an ordered list of sources.
//!
//! Inputs are read in the order given. Any failure aborts the whole load:
//! a comparison against a partial set of sources would be misleading.

use crate::cnf::{read_cnf, DEFAULT_GROUP};
use crate::dsn::Dsn;
use crate::errors::Result;
use crate::live::{read_live, MySqlVariableQuery, VariableQuery};
use cnfdiff_core::{
    baseline_kind, log_op_end, log_op_error, log_op_start, order_sources, ConfigSource, SourceKind,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Default live-server connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// One operator-specified input
#[derive(Debug, Clone)]
pub enum SourceSpec {
    File(PathBuf),
    Live(Dsn),
}

impl SourceSpec {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceSpec::File(_) => SourceKind::File,
            SourceSpec::Live(_) => SourceKind::Live,
        }
    }
}

/// Knobs shared by every input of one run
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Option-file group to read
    pub group: String,
    pub connect_timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            group: DEFAULT_GROUP.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

/// Opens a [`VariableQuery`] for a DSN.
pub trait Connector {
    fn connect(&self, dsn: &Dsn, options: &LoadOptions) -> Result<Box<dyn VariableQuery>>;
}

/// Connects with sqlx.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlConnector;

impl Connector for MySqlConnector {
    fn connect(&self, dsn: &Dsn, options: &LoadOptions) -> Result<Box<dyn VariableQuery>> {
        let query = MySqlVariableQuery::connect(dsn, options.connect_timeout)?;
        Ok(Box::new(query))
    }
}

/// Load every input, then put sources of the baseline kind first.
///
/// The baseline kind is the kind of the first spec. File sources are
/// labelled with their path and live sources with their password-free DSN.
///
/// # Errors
///
/// The first error from any adapter, unchanged.
pub fn load_sources(
    specs: &[SourceSpec],
    options: &LoadOptions,
    connector: &dyn Connector,
) -> Result<Vec<ConfigSource>> {
    let start = Instant::now();
    log_op_start!("load_sources", source_count = specs.len());

    match load_each(specs, options, connector) {
        Ok(sources) => {
            let baseline = baseline_kind(specs.iter().map(SourceSpec::kind));
            let ordered = order_sources(sources, baseline);
            log_op_end!(
                "load_sources",
                duration_ms = start.elapsed().as_millis() as u64,
                source_count = ordered.len(),
                source_kind = %baseline
            );
            Ok(ordered)
        }
        Err(err) => {
            log_op_error!(
                "load_sources",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn load_each(
    specs: &[SourceSpec],
    options: &LoadOptions,
    connector: &dyn Connector,
) -> Result<Vec<ConfigSource>> {
    let mut sources = Vec::with_capacity(specs.len());
    for spec in specs {
        let source = match spec {
            SourceSpec::File(path) => read_cnf(path, &options.group)?,
            SourceSpec::Live(dsn) => {
                let mut query = connector.connect(dsn, options)?;
                read_live(&dsn.to_string(), query.as_mut())?
            }
        };
        sources.push(source);
    }
    Ok(sources)
}
