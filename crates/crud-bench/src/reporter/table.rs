//! Fixed-width comparison table for per-label statistics.

use indexmap::IndexMap;

use super::duration::format_duration;
use crate::stats::SummaryStats;

/// Width of the label column
pub const LABEL_WIDTH: usize = 15;
/// Width of each numeric column
pub const VALUE_WIDTH: usize = 12;

const HEADERS: [&str; 5] = ["Label", "Average", "Minimum", "Maximum", "Std Dev"];

/// Render statistics as a box-drawn table, one row per label in input order.
///
/// Cells are left-aligned and padded on the right; values longer than the
/// column width are not truncated.
///
/// # Examples
///
/// ```
/// use crud_bench::reporter::render_table;
/// use crud_bench::stats::SummaryStats;
/// use indexmap::IndexMap;
///
/// let mut stats = IndexMap::new();
/// stats.insert("Heavy".to_string(), SummaryStats::from_samples(&[1000.0, 2000.0, 3000.0]).unwrap());
///
/// let table = render_table(&stats);
/// assert!(table.contains("│ Heavy           │ 2.00s        │"));
/// ```
pub fn render_table(stats: &IndexMap<String, SummaryStats>) -> String {
    let widths = column_widths();
    let mut out = String::new();

    out.push_str(&border(&widths, '┌', '┬', '┐'));
    out.push_str(&row(&widths, &HEADERS.map(String::from)));
    out.push_str(&border(&widths, '├', '┼', '┤'));

    for (label, summary) in stats {
        out.push_str(&row(
            &widths,
            &[
                label.clone(),
                format_duration(summary.average),
                format_duration(summary.minimum),
                format_duration(summary.maximum),
                format_duration(summary.std_dev),
            ],
        ));
    }

    out.push_str(&border(&widths, '└', '┴', '┘'));
    out
}

fn column_widths() -> [usize; 5] {
    [LABEL_WIDTH, VALUE_WIDTH, VALUE_WIDTH, VALUE_WIDTH, VALUE_WIDTH]
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&middle.to_string()), right)
}

fn row(widths: &[usize], cells: &[String]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!(" {:<width$} ", cell, width = width))
        .collect();
    format!("│{}│\n", cells.join("│"))
}
