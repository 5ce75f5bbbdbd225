use serde::{Deserialize, Serialize};

/// Scan duration used when the input is left empty
pub const DEFAULT_RF_SCAN_SECS: u32 = 10;

/// Accepted scan durations in seconds
pub const RF_SCAN_SECS_RANGE: std::ops::RangeInclusive<u32> = 1..=60;

/// `GET /api/v1/nrf24/scan` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RfScanReport {
    pub success: Option<bool>,
    /// 3-byte Xiaomi remote identifier, hex encoded by the device
    pub xiaomi_remote_id: Option<String>,
    pub message: Option<String>,
}

impl RfScanReport {
    /// Remote identifier, only when the scan succeeded and found one
    pub fn detected_remote(&self) -> Option<&str> {
        match (self.success, self.xiaomi_remote_id.as_deref()) {
            (Some(true), Some(id)) if !id.is_empty() => Some(id),
            _ => None,
        }
    }
}

/// Parses the raw duration input
///
/// Empty input selects [`DEFAULT_RF_SCAN_SECS`]; anything that is not an
/// integer inside [`RF_SCAN_SECS_RANGE`] is rejected.
pub fn parse_scan_duration(input: &str) -> Option<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Some(DEFAULT_RF_SCAN_SECS);
    }
    input
        .parse::<u32>()
        .ok()
        .filter(|secs| RF_SCAN_SECS_RANGE.contains(secs))
}
