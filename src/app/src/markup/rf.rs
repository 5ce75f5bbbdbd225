use super::{escape_html, message_html};
use crate::types::RfScanReport;

/// Placeholder shown while the receiver listens
pub const RF_SCANNING_MESSAGE: &str =
    "Scanning... press buttons on the remote now.";

/// Shown when the scan finished without detecting a remote
pub const RF_RETRY_MESSAGE: &str =
    "No remote detected. Press buttons on the remote while scanning and try again.";

/// Render the outcome of an RF remote scan
pub fn format_rf_scan(report: &RfScanReport) -> String {
    match report.detected_remote() {
        Some(id) => format!(
            concat!(
                r#"<p class="success">Remote detected: <strong class="remote-id">{}</strong></p>"#,
                "\n<p>The remote ID has been saved to the device configuration.</p>"
            ),
            escape_html(id)
        ),
        None => message_html(RF_RETRY_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_remote_is_rendered_prominently() {
        let report = RfScanReport {
            success: Some(true),
            xiaomi_remote_id: Some("ABC123".to_string()),
            message: None,
        };
        let html = format_rf_scan(&report);
        assert!(html.contains(r#"<strong class="remote-id">ABC123</strong>"#));
        assert!(html.contains("saved to the device configuration"));
    }

    #[test]
    fn failed_scan_asks_for_retry() {
        let report = RfScanReport {
            success: Some(false),
            ..Default::default()
        };
        assert_eq!(format_rf_scan(&report), message_html(RF_RETRY_MESSAGE));
    }

    #[test]
    fn missing_identifier_asks_for_retry() {
        let report = RfScanReport {
            success: Some(true),
            ..Default::default()
        };
        assert_eq!(format_rf_scan(&report), message_html(RF_RETRY_MESSAGE));
    }
}
