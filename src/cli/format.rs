//! Output formatting for CLI display.

use std::time::Duration;

use mooring::model::AppStatus;

/// One line per application, e.g. `mysql: active (2 units) ready`.
pub(super) fn format_app_summary(name: &str, app: &AppStatus, units: usize) -> String {
    let current = if app.app_status.current.is_empty() {
        "unknown"
    } else {
        &app.app_status.current
    };
    let noun = if units == 1 { "unit" } else { "units" };
    let mut line = format!("{name}: {current} ({units} {noun})");
    if !app.app_status.message.is_empty() {
        line.push(' ');
        line.push_str(&app.app_status.message);
    }
    line
}

/// Seconds with one decimal place, e.g. `12.5s`.
pub(super) fn format_duration(duration: Duration) -> String {
    format!("{:.1}s", duration.as_secs_f64())
}
