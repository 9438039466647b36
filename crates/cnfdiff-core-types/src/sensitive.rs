//! Redacting wrapper for DSN passwords
//!
//! A password parsed from `user:pass@tcp(..)` or a legacy `p=` part is held
//! as `Sensitive<String>` from the moment it is parsed until the connector
//! hands it to the driver, so no label, log field or error can print it.

use std::fmt;

/// What both `Debug` and `Display` print in place of the value
pub const REDACTED: &str = "***REDACTED***";

/// A value that formats as [`REDACTED`]
///
/// ```
/// use cnfdiff_core_types::Sensitive;
///
/// let password = Sensitive::new("s3cr3t".to_string());
/// assert_eq!(format!("{:?} {}", password, password), "***REDACTED*** ***REDACTED***");
/// assert_eq!(password.expose(), "s3cr3t");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the secret. Only the MySQL connector should need this.
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
