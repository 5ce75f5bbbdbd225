use super::{escape_html, value_text};
use crate::types::{WifiNetwork, WifiScanReport, CONNECT_LABEL};

/// Rendering of an empty or absent scan result
pub const NO_NETWORKS_HTML: &str = "<p>No networks found.</p>";

/// Placeholder for networks that do not broadcast their SSID
pub const HIDDEN_SSID: &str = "(Hidden SSID)";

/// Class marker of rendered Connect controls
pub const CONNECT_BUTTON_CLASS: &str = "connect-btn";

/// Attribute carrying the percent-encoded SSID of a Connect control
pub const SSID_ATTRIBUTE: &str = "data-ssid";

fn format_network(network: &WifiNetwork) -> String {
    let ssid = network.ssid();
    let title = if ssid.is_empty() {
        HIDDEN_SSID.to_string()
    } else {
        escape_html(&ssid)
    };

    format!(
        r#"
  <div class="wifi-card">
    <h4>📶 {title}</h4>
    <ul>
      <li><strong>Signal Strength:</strong> {rssi} dBm</li>
      <li><strong>Channel:</strong> {channel}</li>
      <li><strong>Security:</strong> {authmode}</li>
      <li><strong>BSSID:</strong> {bssid}</li>
    </ul>
    <button class="{CONNECT_BUTTON_CLASS}" {SSID_ATTRIBUTE}="{ssid_attr}">{CONNECT_LABEL}</button>
  </div>"#,
        rssi = value_text(Some(&network.rssi)),
        channel = value_text(Some(&network.channel)),
        authmode = value_text(Some(&network.authmode)),
        bssid = value_text(Some(&network.bssid)),
        ssid_attr = urlencoding::encode(&ssid),
    )
}

/// Render one card per scanned network, each with a Connect control
pub fn format_wifi_scan(report: &WifiScanReport) -> String {
    let networks = report.networks();
    if networks.is_empty() {
        return NO_NETWORKS_HTML.to_string();
    }

    let cards: String = networks.iter().map(format_network).collect();

    format!("<h3>Available Wi-Fi Networks</h3>\n<div class=\"wifi-list\">{cards}\n</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn network(ssid: &str) -> WifiNetwork {
        WifiNetwork {
            ssid: json!(ssid),
            rssi: json!(-42),
            channel: json!(6),
            authmode: json!("WPA2_PSK"),
            bssid: json!("AA:BB:CC:DD:EE:FF"),
        }
    }

    #[test]
    fn empty_list_renders_no_networks_message() {
        let report = WifiScanReport {
            networks: Some(Vec::new()),
        };
        assert_eq!(format_wifi_scan(&report), NO_NETWORKS_HTML);
    }

    #[test]
    fn absent_list_renders_no_networks_message() {
        assert_eq!(
            format_wifi_scan(&WifiScanReport::default()),
            NO_NETWORKS_HTML
        );
    }

    #[test]
    fn hidden_ssid_gets_placeholder() {
        let report = WifiScanReport {
            networks: Some(vec![network("")]),
        };
        let html = format_wifi_scan(&report);
        assert!(html.contains("<h4>📶 (Hidden SSID)</h4>"));
        assert!(html.contains(r#"data-ssid="""#));
    }

    #[test]
    fn card_lists_details_and_connect_control() {
        let report = WifiScanReport {
            networks: Some(vec![network("My Net&Co")]),
        };
        let html = format_wifi_scan(&report);

        assert!(html.contains("<h4>📶 My Net&amp;Co</h4>"));
        assert!(html.contains("<strong>Signal Strength:</strong> -42 dBm"));
        assert!(html.contains("<strong>Channel:</strong> 6"));
        assert!(html.contains("<strong>Security:</strong> WPA2_PSK"));
        assert!(html.contains("<strong>BSSID:</strong> AA:BB:CC:DD:EE:FF"));
        assert!(html.contains(
            r#"<button class="connect-btn" data-ssid="My%20Net%26Co">Connect</button>"#
        ));
    }

    #[test]
    fn null_ssid_and_raw_values_are_rendered() {
        let report = WifiScanReport {
            networks: Some(vec![WifiNetwork {
                authmode: json!(3),
                ..Default::default()
            }]),
        };
        let html = format_wifi_scan(&report);

        assert!(html.contains("<h4>📶 (Hidden SSID)</h4>"));
        assert!(html.contains("<strong>Security:</strong> 3"));
        assert!(html.contains("<strong>Channel:</strong> undefined"));
    }

    #[test]
    fn renders_one_card_per_network() {
        let report = WifiScanReport {
            networks: Some(vec![network("a"), network("b"), network("c")]),
        };
        assert_eq!(format_wifi_scan(&report).matches("wifi-card").count(), 3);
    }
}
