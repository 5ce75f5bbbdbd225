use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde_json::Value;

use super::value_text;
use crate::types::StatusReport;

/// Rendering of a missing or unrepresentable timestamp
pub const INVALID_DATE: &str = "Invalid Date";

/// Epoch seconds from an integer, a float or a numeric string
fn epoch_secs(value: &Value) -> Option<f64> {
    let secs = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    secs.is_finite().then_some(secs)
}

fn to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    let whole = secs.floor();
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    let nanos = ((secs - whole) * 1e9) as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
}

/// Format the device clock (Unix epoch seconds) as local date and time
///
/// `utc_offset_minutes` is the viewer's offset from UTC; out-of-range
/// offsets fall back to UTC. Anything that is not a representable number of
/// seconds renders as [`INVALID_DATE`].
pub fn format_timestamp(epoch: Option<&Value>, utc_offset_minutes: i32) -> String {
    let Some(utc) = epoch.and_then(epoch_secs).and_then(to_datetime) else {
        return INVALID_DATE.to_string();
    };
    let offset = utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());

    utc.with_timezone(&offset)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Render the system status list in fixed order
pub fn format_status(report: &StatusReport, utc_offset_minutes: i32) -> String {
    let rows = [
        ("Status", value_text(report.status.as_ref())),
        (
            "System Time",
            format_timestamp(report.sys_timestamp.as_ref(), utc_offset_minutes),
        ),
        ("IP Address", value_text(report.ip.as_ref())),
        ("Main DNS", value_text(report.main_dns.as_ref())),
        ("Uptime", value_text(report.uptime.as_ref())),
        ("Free Heap", value_text(report.free_heap.as_ref())),
    ];

    let items: String = rows
        .iter()
        .map(|(label, value)| format!("\n  <li><strong>{label}:</strong> {value}</li>"))
        .collect();

    format!("<ul>{items}\n</ul>")
}
