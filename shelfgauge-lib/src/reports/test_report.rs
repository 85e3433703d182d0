use super::Measurement;

const LOG_TARGET: &str = "reports";

/// Format the relative change from `previous` to `current` as a signed percentage.
///
/// The result always carries a sign and two decimals, such as `+5.00%` or `-10.00%`.
/// Returns `None` when `previous` is zero or the change is not a finite number,
/// since there is no meaningful baseline to compare against.
#[must_use]
pub fn format_delta(current: f64, previous: f64) -> Option<String> {
    if previous == 0.0 {
        return None;
    }

    // `-0.0 + 0.0` is `+0.0`: no change reads `+0.00%` even for negative baselines
    let percent = (current - previous) / previous * 100.0 + 0.0;
    percent.is_finite().then(|| format!("{percent:+.2}%"))
}

/// Describe `current`, relative to `previous` when one exists.
///
/// Without a usable previous measurement the line is marked as `new`. A current
/// value that is not a finite number is marked as such, baseline or not.
#[must_use]
pub fn format_report(current: &Measurement, previous: Option<&Measurement>) -> String {
    if !current.value.is_finite() {
        return format!("`{}`: {} (not a number)", current.name, current.value);
    }

    let delta = previous.and_then(|previous| {
        let delta = format_delta(current.value, previous.value);
        if delta.is_none() {
            log::debug!(
                target: LOG_TARGET,
                "No usable baseline for '{}' (previous value {}), reporting it as new",
                current.name,
                previous.value
            );
        }
        delta
    });

    match delta {
        Some(delta) => format!("`{}`: {} ({delta})", current.name, current.value),
        None => format!("`{}`: {} (new)", current.name, current.value),
    }
}
