//! Human-readable rendering of millisecond durations.

/// Format a duration given in milliseconds.
///
/// Values of one second or more are shown in seconds with two decimals
/// (`"1.50s"`); smaller values are shown as whole milliseconds (`"843ms"`).
/// The unit is picked from the unrounded value, so `999.6` renders as
/// `"1000ms"`.
///
/// Rounding is round-half-to-even in the output unit: `0.5 -> "0ms"`,
/// `2.5 -> "2ms"`, `1005.0 -> "1.00s"`, `1015.0 -> "1.02s"`.
///
/// # Examples
///
/// ```
/// use crud_bench::reporter::format_duration;
///
/// assert_eq!(format_duration(842.7), "843ms");
/// assert_eq!(format_duration(999.0), "999ms");
/// assert_eq!(format_duration(1000.0), "1.00s");
/// assert_eq!(format_duration(1500.0), "1.50s");
/// ```
pub fn format_duration(ms: f64) -> String {
    if ms >= 1000.0 {
        // Round in hundredths of a second, then print the exact result.
        let centis = (ms / 10.0).round_ties_even();
        format!("{:.2}s", centis / 100.0)
    } else {
        format!("{:.0}ms", ms.round_ties_even())
    }
}
