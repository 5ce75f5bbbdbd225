use serde::{Deserialize, Serialize};

use crate::markup;

/// Label shown on a trigger while its request is outstanding
pub const LOADING_LABEL: &str = "Loading...";

/// Fixed label of every rendered Wi-Fi Connect control
pub const CONNECT_LABEL: &str = "Connect";

/// Opacity of a disabled trigger, in percent
pub const DISABLED_OPACITY_PERCENT: u8 = 60;

/// Opacity of an enabled trigger, in percent
pub const ENABLED_OPACITY_PERCENT: u8 = 100;

/// Panel features that own a trigger, a busy indicator and an output area
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Status,
    WifiScan,
    Ntp,
    RfScan,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Status,
        Feature::WifiScan,
        Feature::Ntp,
        Feature::RfScan,
    ];

    /// Fixed binding of this feature to its endpoint and DOM elements
    pub fn binding(self) -> FeatureBinding {
        match self {
            Feature::Status => FeatureBinding {
                endpoint: "/api/v1/status",
                method: HttpMethod::Get,
                idle_label: "Get Status",
                button_id: "api-status-btn",
                loader_id: "status-loader",
                output_id: "status-output",
                input_id: None,
            },
            Feature::WifiScan => FeatureBinding {
                endpoint: "/api/v1/wifi/scan",
                method: HttpMethod::Get,
                idle_label: "Scan Wi-Fi",
                button_id: "wifi-scan-btn",
                loader_id: "wifi-loader",
                output_id: "wifi-output",
                input_id: None,
            },
            Feature::Ntp => FeatureBinding {
                endpoint: "/api/v1/ntp/set",
                method: HttpMethod::Post,
                idle_label: "Set NTP Server",
                button_id: "ntp-set-btn",
                loader_id: "ntp-loader",
                output_id: "ntp-output",
                input_id: Some("ntp-domain"),
            },
            Feature::RfScan => FeatureBinding {
                endpoint: "/api/v1/nrf24/scan",
                method: HttpMethod::Get,
                idle_label: "Scan Remote",
                button_id: "rf-scan-btn",
                loader_id: "rf-loader",
                output_id: "rf-output",
                input_id: Some("rf-duration"),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Immutable association of a feature with its endpoint and DOM element ids
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FeatureBinding {
    pub endpoint: &'static str,
    pub method: HttpMethod,
    pub idle_label: &'static str,
    pub button_id: &'static str,
    pub loader_id: &'static str,
    pub output_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_id: Option<&'static str>,
}

/// Trigger button state (UI state)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ButtonState {
    label: String,
    idle_label: String,
    disabled: bool,
    opacity_percent: u8,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::idle(String::new())
    }
}

impl ButtonState {
    /// Enabled button whose idle label is restored after every request
    pub fn idle(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            idle_label: label.clone(),
            label,
            disabled: false,
            opacity_percent: ENABLED_OPACITY_PERCENT,
        }
    }

    /// A rendered Wi-Fi Connect control
    pub fn connect() -> Self {
        Self::idle(CONNECT_LABEL)
    }

    pub fn disable(&mut self) {
        self.disabled = true;
        self.opacity_percent = DISABLED_OPACITY_PERCENT;
        self.label = LOADING_LABEL.to_string();
    }

    pub fn restore(&mut self) {
        self.disabled = false;
        self.opacity_percent = ENABLED_OPACITY_PERCENT;
        self.label = self.idle_label.clone();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn opacity_percent(&self) -> u8 {
        self.opacity_percent
    }
}

/// Per-feature busy state, trigger and output area
///
/// Only the handlers of the owning feature mutate it. `busy` drives both the
/// loader visibility and the disabled trigger.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureState {
    busy: bool,
    button: ButtonState,
    output: String,
    failed: bool,
}

impl FeatureState {
    pub fn new(feature: Feature) -> Self {
        Self {
            busy: false,
            button: ButtonState::idle(feature.binding().idle_label),
            output: String::new(),
            failed: false,
        }
    }

    /// Enter busy state: show loader, clear output, disable the trigger
    pub fn begin(&mut self) {
        self.busy = true;
        self.output.clear();
        self.failed = false;
        self.button.disable();
    }

    /// Leave busy state and restore the trigger's idle label
    pub fn finish(&mut self) {
        self.busy = false;
        self.button.restore();
    }

    /// Replace the output area with rendered markup
    pub fn show_output(&mut self, html: String) {
        self.output = html;
        self.failed = false;
    }

    /// Replace the output area with an inline error
    pub fn show_error(&mut self, message: &str) {
        self.output = markup::error_html(message);
        self.failed = true;
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
        self.failed = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn loader_visible(&self) -> bool {
        self.busy
    }

    /// Whether the output area currently shows an error
    pub fn has_error(&self) -> bool {
        self.failed
    }

    pub fn button(&self) -> &ButtonState {
        &self.button
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

/// Blocking confirmation the shell shows once, then dismisses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub success: bool,
    pub text: String,
}

impl Alert {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_disables_and_finish_restores_label() {
        let mut state = FeatureState::new(Feature::Status);
        state.show_output("<p>old</p>".to_string());

        state.begin();
        assert!(state.is_busy());
        assert!(state.loader_visible());
        assert!(state.button().is_disabled());
        assert_eq!(state.button().label(), LOADING_LABEL);
        assert_eq!(state.button().opacity_percent(), DISABLED_OPACITY_PERCENT);
        assert!(state.output().is_empty());

        state.finish();
        assert!(!state.is_busy());
        assert!(!state.button().is_disabled());
        assert_eq!(state.button().label(), "Get Status");
        assert_eq!(state.button().opacity_percent(), ENABLED_OPACITY_PERCENT);
    }

    #[test]
    fn view_model_carries_reduced_opacity() {
        let mut button = ButtonState::connect();
        button.disable();

        let json = serde_json::to_value(&button).unwrap();
        assert_eq!(json["disabled"], true);
        assert_eq!(json["opacity_percent"], 60);
    }

    #[test]
    fn double_begin_still_restores_idle_label() {
        let mut state = FeatureState::new(Feature::WifiScan);
        state.begin();
        state.begin();
        state.finish();
        assert_eq!(state.button().label(), "Scan Wi-Fi");
    }

    #[test]
    fn connect_control_restores_fixed_label() {
        let mut button = ButtonState::connect();
        button.disable();
        assert_eq!(button.label(), LOADING_LABEL);
        button.restore();
        assert_eq!(button.label(), CONNECT_LABEL);
        assert!(!button.is_disabled());
    }

    #[test]
    fn every_feature_has_distinct_dom_ids() {
        let mut ids: Vec<&str> = Feature::ALL
            .iter()
            .flat_map(|f| {
                let b = f.binding();
                [b.button_id, b.loader_id, b.output_id]
            })
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
