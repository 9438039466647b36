//! Legacy `key=value` comma-separated DSNs.

use super::{parse_host_port, Address, Dsn, DEFAULT_PORT};
use crate::errors::{invalid_dsn, Result};
use cnfdiff_core_types::Sensitive;
use std::path::PathBuf;

/// Parse `h=host,P=port,u=user,p=password,D=db,S=socket`.
///
/// Each part is a one-letter key, `=`, and a value. Parts shorter than three
/// characters and unknown keys are skipped, a non-numeric `P` is ignored, and
/// `S` selects a unix socket over TCP. At least one part must be recognised.
///
/// # Errors
///
/// - `InvalidDsn`: no part was recognised
pub fn parse_legacy_dsn(value: &str) -> Result<Dsn> {
    let mut dsn = Dsn::default();
    let mut host: Option<String> = None;
    let mut port: Option<u16> = None;
    let mut socket: Option<PathBuf> = None;
    let mut recognised = 0usize;

    for part in value.split(',') {
        let part = part.trim();
        if part.len() < 3 || part.as_bytes()[1] != b'=' || !part.is_char_boundary(2) {
            continue;
        }
        let val = &part[2..];
        match part.as_bytes()[0] {
            b'h' => host = Some(val.to_string()),
            b'P' => match val.parse::<u16>() {
                Ok(p) => port = Some(p),
                Err(_) => {
                    tracing::warn!(port = val, "ignoring non-numeric port in legacy DSN");
                    continue;
                }
            },
            b'u' => dsn.user = Some(val.to_string()),
            b'p' => dsn.password = Some(Sensitive::new(val.to_string())),
            b'D' => dsn.database = Some(val.to_string()),
            b'S' => socket = Some(PathBuf::from(val)),
            _ => continue,
        }
        recognised += 1;
    }

    if recognised == 0 {
        return Err(invalid_dsn(&format!(
            "'{}' is neither a driver DSN nor a legacy h=,P=,u= DSN",
            redact(value)
        )));
    }

    dsn.address = match (socket, host) {
        (Some(path), _) => Address::Unix(path),
        (None, Some(h)) => match parse_host_port(&h)? {
            Address::Tcp { host, port: p } => Address::Tcp {
                host,
                port: port.unwrap_or(p),
            },
            unix => unix,
        },
        (None, None) => match Address::default() {
            Address::Tcp { host, .. } => Address::Tcp {
                host,
                port: port.unwrap_or(DEFAULT_PORT),
            },
            unix => unix,
        },
    };

    Ok(dsn)
}

/// Drop `p=` parts so error messages never echo a password.
fn redact(value: &str) -> String {
    value
        .split(',')
        .map(|part| {
            if part.trim_start().starts_with("p=") {
                "p=***"
            } else {
                part
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
