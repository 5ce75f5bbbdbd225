use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One access point from `GET /api/v1/wifi/scan`
///
/// Display fields are kept as raw JSON values and rendered as they arrive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WifiNetwork {
    pub ssid: Value,
    /// Signal strength in dBm
    pub rssi: Value,
    pub channel: Value,
    pub authmode: Value,
    pub bssid: Value,
}

impl WifiNetwork {
    /// SSID as text; empty for hidden networks
    pub fn ssid(&self) -> String {
        match &self.ssid {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WifiScanReport {
    #[serde(default, deserialize_with = "networks_if_list")]
    pub networks: Option<Vec<WifiNetwork>>,
}

/// Anything but a JSON array counts as no list; entries that are not
/// objects become networks without fields.
fn networks_if_list<'de, D>(deserializer: D) -> Result<Option<Vec<WifiNetwork>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(Some(
        entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).unwrap_or_default())
            .collect(),
    ))
}

impl WifiScanReport {
    /// Networks in device order; empty when the list is absent
    pub fn networks(&self) -> &[WifiNetwork] {
        self.networks.as_deref().unwrap_or_default()
    }
}

// Request types for API calls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WifiConnectRequest {
    pub ssid: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(body: Value) -> WifiScanReport {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn non_list_networks_count_as_absent() {
        for networks in [json!({}), json!("none"), json!(3), json!(null)] {
            assert!(report(json!({ "networks": networks })).networks().is_empty());
        }
    }

    #[test]
    fn odd_field_types_do_not_reject_the_list() {
        let report = report(json!({
            "networks": [
                { "ssid": null, "authmode": 3 },
                { "ssid": "home", "rssi": "-40" },
                7
            ]
        }));

        let networks = report.networks();
        assert_eq!(networks.len(), 3);
        assert_eq!(networks[0].ssid(), "");
        assert_eq!(networks[0].authmode, json!(3));
        assert_eq!(networks[1].ssid(), "home");
        assert_eq!(networks[2], WifiNetwork::default());
    }

    #[test]
    fn numeric_ssid_is_shown_as_text() {
        let network = WifiNetwork {
            ssid: json!(42),
            ..Default::default()
        };
        assert_eq!(network.ssid(), "42");
    }
}
