//! Pure formatters mapping decoded device payloads to HTML markup
//!
//! Device-supplied text is escaped before it lands in markup; plain values
//! (addresses, numbers, identifiers) therefore appear verbatim.

mod rf;
mod status;
mod wifi;

use serde_json::Value;

pub use rf::{format_rf_scan, RF_RETRY_MESSAGE, RF_SCANNING_MESSAGE};
pub use status::{format_status, format_timestamp, INVALID_DATE};
pub use wifi::{
    format_wifi_scan, CONNECT_BUTTON_CLASS, HIDDEN_SSID, NO_NETWORKS_HTML, SSID_ATTRIBUTE,
};

/// Rendering of a missing device value
pub const UNDEFINED: &str = "undefined";

/// Inline validation error shown by the NTP form
pub const NTP_DOMAIN_REQUIRED: &str = "Please enter an NTP server domain.";

/// Inline validation error shown by the RF scan form
pub const RF_DURATION_OUT_OF_RANGE: &str = "Scan duration must be between 1 and 60 seconds.";

/// Escape text for use in element content and double-quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Display text of a raw device value, strings unquoted
pub(crate) fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => UNDEFINED.to_string(),
        Some(Value::String(s)) => escape_html(s),
        Some(other) => escape_html(&other.to_string()),
    }
}

/// Inline error styled in the panel's error color
pub fn error_html(message: &str) -> String {
    format!(
        r#"<p class="error" style="color: var(--error-color);">{}</p>"#,
        escape_html(message)
    )
}

/// Plain informational paragraph
pub fn message_html(message: &str) -> String {
    format!("<p>{}</p>", escape_html(message))
}

/// Success message after the device accepted a new NTP server
pub fn format_ntp_success(domain: &str) -> String {
    format!(
        r#"<p class="success">NTP server set to <strong>{}</strong>.</p>"#,
        escape_html(domain)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape_html("1.2.3.4"), "1.2.3.4");
    }

    #[test]
    fn error_contains_message_verbatim() {
        let html = error_html("boom");
        assert_eq!(
            html,
            r#"<p class="error" style="color: var(--error-color);">boom</p>"#
        );
    }

    #[test]
    fn ntp_success_embeds_domain() {
        assert!(format_ntp_success("pool.ntp.org").contains("<strong>pool.ntp.org</strong>"));
    }
}
