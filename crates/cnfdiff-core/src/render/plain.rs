//! Column-aligned text table.

use crate::diff::ConfigDiff;

const KEY_HEADER: &str = "Variable";

/// Render the diff as a text table.
///
/// Returns an empty string when there are no differences, otherwise a count
/// line followed by a `Variable` column and one column per source:
///
/// ```text
/// 1 config difference
/// Variable        /etc/my.cnf root@tcp(db1:3306)
/// =============== =========== ==================
/// max_connections 100         151
/// ```
pub fn render_plain(diff: &ConfigDiff) -> String {
    if diff.is_empty() {
        return String::new();
    }

    let mut header = vec![KEY_HEADER.to_string()];
    header.extend(diff.columns().iter().cloned());

    let rows: Vec<Vec<String>> = diff
        .iter()
        .map(|(key, slots)| {
            std::iter::once(key.to_string())
                .chain(slots.iter().map(|s| s.to_string()))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let mut out = String::new();
    let n = diff.len();
    out.push_str(&format!(
        "{} config difference{}\n",
        n,
        if n == 1 { "" } else { "s" }
    ));
    push_row(&mut out, &header, &widths);
    let underline: Vec<String> = widths.iter().map(|w| "=".repeat(*w)).collect();
    push_row(&mut out, &underline, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        if i == last {
            out.push_str(cell);
        } else {
            let pad = widths[i].saturating_sub(cell.chars().count());
            out.push_str(cell);
            out.push_str(&" ".repeat(pad + 1));
        }
    }
    out.push('\n');
}
