//! Connection strings for live servers.
//!
//! Two spellings are accepted. The primary one is the go-mysql-driver form
//!
//! ```text
//! [user[:password]@][tcp[(host[:port])]|unix(/path)][/dbname][?param=value&...]
//! ```
//!
//! and when that does not parse the input is retried as a legacy
//! comma-separated DSN (`h=host,P=port,u=user,p=password,D=db,S=socket`).

pub mod legacy;

use crate::errors::{invalid_dsn, Result};
use cnfdiff_core_types::Sensitive;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3306;

/// Network endpoint of a server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    Tcp { host: String, port: u16 },
    Unix(PathBuf),
}

impl Default for Address {
    fn default() -> Self {
        Address::Tcp {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Tcp { host, port } if host.contains(':') => {
                write!(f, "tcp([{}]:{})", host, port)
            }
            Address::Tcp { host, port } => write!(f, "tcp({}:{})", host, port),
            Address::Unix(path) => write!(f, "unix({})", path.display()),
        }
    }
}

/// A parsed connection string
///
/// `Display` never includes the password, so a `Dsn` can be used directly as
/// a source label or log field.
#[derive(Debug, Clone, Default)]
pub struct Dsn {
    pub user: Option<String>,
    pub password: Option<Sensitive<String>>,
    pub address: Address,
    pub database: Option<String>,
}

impl Dsn {
    /// Parse either DSN spelling.
    ///
    /// # Errors
    ///
    /// - `InvalidDsn`: the value is neither a driver DSN nor a legacy DSN
    pub fn parse(value: &str) -> Result<Self> {
        match parse_driver_dsn(value) {
            Ok(dsn) => Ok(dsn),
            Err(first) => legacy::parse_legacy_dsn(value).map_err(|_| first),
        }
    }
}

impl FromStr for Dsn {
    type Err = cnfdiff_core::ExError;

    fn from_str(s: &str) -> Result<Self> {
        Dsn::parse(s)
    }
}

impl fmt::Display for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user) = &self.user {
            write!(f, "{}@", user)?;
        }
        write!(f, "{}/", self.address)?;
        if let Some(db) = &self.database {
            f.write_str(db)?;
        }
        Ok(())
    }
}

/// Parse the go-mysql-driver DSN form.
pub fn parse_driver_dsn(value: &str) -> Result<Dsn> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid_dsn("empty DSN"));
    }

    // Credentials end at the last '@' so passwords may contain '@'
    let (creds, rest) = match value.rfind('@') {
        Some(i) => (Some(&value[..i]), &value[i + 1..]),
        None => (None, value),
    };

    let (user, password) = match creds {
        Some(c) => {
            let (u, p) = match c.split_once(':') {
                Some((u, p)) => (u, Some(p)),
                None => (c, None),
            };
            if u.is_empty() {
                return Err(invalid_dsn("empty user name before '@'"));
            }
            (
                Some(u.to_string()),
                p.map(|p| Sensitive::new(p.to_string())),
            )
        }
        None => (None, None),
    };

    let (rest, params) = match rest.split_once('?') {
        Some((r, p)) => (r, Some(p)),
        None => (rest, None),
    };
    if let Some(params) = params {
        validate_params(params)?;
    }

    let (net, database) = match rest.find('/') {
        Some(i) if !rest[..i].contains('(') || rest[..i].contains(')') => {
            (&rest[..i], Some(&rest[i + 1..]))
        }
        // '/' inside unix(...) belongs to the socket path
        _ => match rest.rfind(")/") {
            Some(i) => (&rest[..=i], Some(&rest[i + 2..])),
            None => (rest, None),
        },
    };

    let address = parse_net(net)?;
    let database = database.filter(|d| !d.is_empty()).map(str::to_string);

    Ok(Dsn {
        user,
        password,
        address,
        database,
    })
}

fn parse_net(net: &str) -> Result<Address> {
    if net.is_empty() {
        return Ok(Address::default());
    }
    let (proto, addr) = match net.split_once('(') {
        Some((proto, rest)) => {
            let addr = rest
                .strip_suffix(')')
                .ok_or_else(|| invalid_dsn("unterminated address, expected ')'"))?;
            (proto, Some(addr))
        }
        None => (net, None),
    };

    match proto {
        "tcp" => match addr {
            None | Some("") => Ok(Address::default()),
            Some(a) => parse_host_port(a),
        },
        "unix" => match addr {
            Some(path) if !path.is_empty() => Ok(Address::Unix(PathBuf::from(path))),
            _ => Err(invalid_dsn("unix protocol requires a socket path")),
        },
        other => Err(invalid_dsn(&format!("unsupported protocol '{}'", other))),
    }
}

/// `host`, `host:port`, `[v6]` or `[v6]:port`
pub(crate) fn parse_host_port(addr: &str) -> Result<Address> {
    let (host, port) = if let Some(rest) = addr.strip_prefix('[') {
        let (host, tail) = rest
            .split_once(']')
            .ok_or_else(|| invalid_dsn("unterminated IPv6 address"))?;
        (host, tail.strip_prefix(':'))
    } else if addr.matches(':').count() == 1 {
        let (h, p) = addr.split_once(':').unwrap_or((addr, ""));
        (h, Some(p))
    } else {
        (addr, None)
    };

    let port = match port {
        Some(p) => p
            .parse::<u16>()
            .map_err(|_| invalid_dsn(&format!("invalid port '{}'", p)))?,
        None => DEFAULT_PORT,
    };
    let host = if host.is_empty() { DEFAULT_HOST } else { host };

    Ok(Address::Tcp {
        host: host.to_string(),
        port,
    })
}

fn validate_params(params: &str) -> Result<()> {
    for pair in params.split('&').filter(|p| !p.is_empty()) {
        match pair.split_once('=') {
            Some((k, _)) if !k.is_empty() => {}
            _ => return Err(invalid_dsn(&format!("invalid parameter '{}'", pair))),
        }
    }
    Ok(())
}
