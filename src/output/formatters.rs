//! Formatting utilities for terminal output

/// Join a ladder into a single arrow-separated line
#[must_use]
pub fn ladder_arrow(ladder: &[String]) -> String {
    ladder.join(" → ")
}

/// Format a duration in the most readable unit
#[must_use]
pub fn format_elapsed(elapsed: std::time::Duration) -> String {
    let millis = elapsed.as_secs_f64() * 1000.0;

    if millis < 1000.0 {
        format!("{millis:.3} ms")
    } else {
        format!("{:.2} s", elapsed.as_secs_f64())
    }
}
