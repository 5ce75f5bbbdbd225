use serde::{Deserialize, Serialize};

use crate::types::*;

/// Status domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    Fetch,
    #[serde(skip)]
    FetchResponse(Result<StatusReport, ApiError>),
}

/// Wi-Fi domain events (scan and per-network connect)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum WifiEvent {
    Scan,
    /// A rendered Connect control was clicked.
    ///
    /// `ssid_attr` is the percent-encoded `data-ssid` attribute of the control,
    /// `password` is `None` when the shell's prompt was cancelled.
    Connect {
        ssid_attr: String,
        password: Option<String>,
    },
    #[serde(skip)]
    ScanResponse(Result<WifiScanReport, ApiError>),
    #[serde(skip)]
    ConnectResponse {
        ssid: String,
        result: Result<ApiAck, ApiError>,
    },
}

/// NTP domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum NtpEvent {
    Set {
        domain: String,
    },
    #[serde(skip)]
    SetResponse {
        domain: String,
        result: Result<ApiAck, ApiError>,
    },
}

/// RF remote scan events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum RfEvent {
    /// Raw content of the duration input; empty selects the default.
    Scan {
        duration: String,
    },
    #[serde(skip)]
    ScanResponse(Result<RfScanReport, ApiError>),
}

/// UI domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DismissAlert,
    ClearOutput(Feature),
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize { utc_offset_minutes: i32 },
    Status(StatusEvent),
    Wifi(WifiEvent),
    Ntp(NtpEvent),
    Rf(RfEvent),
    Ui(UiEvent),
}
