use thiserror::Error;

/// Result type alias using CnfDiffError
pub type Result<T> = std::result::Result<T, CnfDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure that can stop a cnfdiff run is classified by one of these
/// kinds. Each kind maps to a stable error code usable by scripts that wrap
/// the CLI and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    UnknownOutputFormat,
    InvalidDsn,
    InvalidCnf,
    NotFound,

    // Integration/IO
    Io,
    Connection,
    Query,
    Timeout,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownOutputFormat => "ERR_UNKNOWN_OUTPUT_FORMAT",
            ExErrorKind::InvalidDsn => "ERR_INVALID_DSN",
            ExErrorKind::InvalidCnf => "ERR_INVALID_CNF",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Connection => "ERR_CONNECTION",
            ExErrorKind::Query => "ERR_QUERY",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Adapters build one of these when a file cannot be read, a DSN cannot be
/// parsed, or a server cannot be queried. The diff engine itself never
/// produces errors.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    source_name: Option<String>,
    line: Option<usize>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            source_name: None,
            line: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the label of the configuration source being loaded (file path or redacted DSN)
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Add a 1-based line number (option-file syntax errors)
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the source label, if any
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Get the line number, if any
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(name) = &self.source_name {
            write!(f, " (source: {})", name)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        if let Some(source) = &self.source {
            write!(f, ": caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Errors raised by the core crate itself (rendering and output selection)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CnfDiffError {
    /// The requested output format name is not one of plain, json, prettyJson
    #[error("Unknown output format: {format}")]
    UnknownOutputFormat { format: String },

    /// Serialization of the diff failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from CnfDiffError to ExError
impl From<CnfDiffError> for ExError {
    fn from(err: CnfDiffError) -> Self {
        match err {
            CnfDiffError::UnknownOutputFormat { format } => {
                ExError::new(ExErrorKind::UnknownOutputFormat)
                    .with_op("parse_output_format")
                    .with_message(format!(
                        "unknown output format '{}' (expected plain, json or prettyJson)",
                        format
                    ))
            }
            CnfDiffError::Serialization { message } => ExError::new(ExErrorKind::Serialization)
                .with_op("render")
                .with_message(message),
        }
    }
}

/// Conversion from serde_json::Error to CnfDiffError
impl From<serde_json::Error> for CnfDiffError {
    fn from(err: serde_json::Error) -> Self {
        CnfDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
