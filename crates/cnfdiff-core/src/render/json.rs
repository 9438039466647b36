use crate::diff::ConfigDiff;
use crate::errors::Result;

/// Render the diff as a JSON object mapping each key to its slots.
///
/// Missing slots are encoded as the `"<Missing>"` string. An empty diff is
/// `{}`.
///
/// # Errors
///
/// - `Serialization`: serde_json failed to encode the rows
pub fn render_json(diff: &ConfigDiff, pretty: bool) -> Result<String> {
    let mut out = if pretty {
        serde_json::to_string_pretty(diff.rows())?
    } else {
        serde_json::to_string(diff.rows())?
    };
    out.push('\n');
    Ok(out)
}
