//! Option-file parser
//!
//! Handles the subset of the MySQL option-file syntax that carries values:
//! `[group]` headers, `key = value`, bare `key` flags, `#`/`;` comments and
//! quoted values. `!include` directives are skipped.

use crate::errors::{cnf_syntax, io_error, Result};
use cnfdiff_core::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parse the `group` section of an option file on disk
pub fn parse_cnf_file(path: &Path, group: &str) -> Result<BTreeMap<String, Value>> {
    let content = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    parse_cnf_str(&content, group, path)
}

/// Parse the `group` section of option-file text
///
/// `path` is only used to label errors.
pub fn parse_cnf_str(content: &str, group: &str, path: &Path) -> Result<BTreeMap<String, Value>> {
    let mut entries = BTreeMap::new();
    let mut in_group = false;

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('!') {
            tracing::warn!(
                source = %path.display(),
                line = line_no,
                directive = line,
                "skipping option-file directive"
            );
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .split_once(']')
                .map(|(name, _)| name.trim())
                .ok_or_else(|| cnf_syntax(path, line_no, "unterminated group header"))?;
            if name.is_empty() {
                return Err(cnf_syntax(path, line_no, "empty group name"));
            }
            in_group = name == group;
            continue;
        }

        if !in_group {
            continue;
        }

        // A comment may follow a bare flag, and may itself contain '='
        let (key, value) = match line.split_once('=') {
            Some((k, v)) if strip_inline_comment(k).len() == k.len() => {
                (k.trim(), Some(unquote(strip_inline_comment(v.trim()))))
            }
            _ => (strip_inline_comment(line).trim_end(), None),
        };
        if key.is_empty() {
            return Err(cnf_syntax(path, line_no, "option without a name"));
        }

        let value = value.map(Value::from).unwrap_or(Value::Bool(true));
        // Later assignments override earlier ones
        entries.insert(canonical_key(key), value);
    }

    Ok(entries)
}

/// MySQL treats `-` and `_` in option names as the same character; live
/// servers report underscores.
pub fn canonical_key(key: &str) -> String {
    key.replace('-', "_")
}

fn strip_inline_comment(value: &str) -> &str {
    if let Some(quote) = value.chars().next().filter(|c| *c == '"' || *c == '\'') {
        // Anything after the closing quote is dropped
        return match value[1..].find(quote) {
            Some(end) => &value[..end + 2],
            None => value,
        };
    }
    let bytes = value.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()) {
            return value[..i].trim_end();
        }
    }
    value
}

fn unquote(value: &str) -> String {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return value[1..value.len() - 1].to_string();
        }
    }
    value.to_string()
}
