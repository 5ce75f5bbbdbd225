use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Feature state (one record per bound feature)
    pub status: FeatureState,
    pub wifi_scan: FeatureState,
    pub ntp: FeatureState,
    pub rf_scan: FeatureState,

    /// Rendered Wi-Fi Connect controls, keyed by decoded SSID
    pub connect_controls: BTreeMap<String, ButtonState>,

    /// Pending blocking confirmation (Wi-Fi connect outcome)
    pub alert: Option<Alert>,

    /// Viewer's offset from UTC used for displayed timestamps
    pub utc_offset_minutes: i32,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            status: FeatureState::new(Feature::Status),
            wifi_scan: FeatureState::new(Feature::WifiScan),
            ntp: FeatureState::new(Feature::Ntp),
            rf_scan: FeatureState::new(Feature::RfScan),
            connect_controls: BTreeMap::new(),
            alert: None,
            utc_offset_minutes: 0,
        }
    }
}

impl Model {
    pub fn feature(&self, feature: Feature) -> &FeatureState {
        match feature {
            Feature::Status => &self.status,
            Feature::WifiScan => &self.wifi_scan,
            Feature::Ntp => &self.ntp,
            Feature::RfScan => &self.rf_scan,
        }
    }

    pub fn feature_mut(&mut self, feature: Feature) -> &mut FeatureState {
        match feature {
            Feature::Status => &mut self.status,
            Feature::WifiScan => &mut self.wifi_scan,
            Feature::Ntp => &mut self.ntp,
            Feature::RfScan => &mut self.rf_scan,
        }
    }

    /// Connect control for `ssid`, created on first use
    pub fn connect_control_mut(&mut self, ssid: &str) -> &mut ButtonState {
        self.connect_controls
            .entry(ssid.to_string())
            .or_insert_with(ButtonState::connect)
    }

    /// Sync the connect registry with a freshly rendered scan result
    ///
    /// Controls of networks no longer listed are dropped unless a connect
    /// request for them is still outstanding.
    pub fn register_connect_controls<'a>(&mut self, ssids: impl IntoIterator<Item = &'a str>) {
        let listed: BTreeMap<String, ButtonState> = ssids
            .into_iter()
            .map(|ssid| (ssid.to_string(), ButtonState::connect()))
            .collect();

        self.connect_controls
            .retain(|ssid, control| control.is_disabled() || listed.contains_key(ssid));

        for (ssid, control) in listed {
            self.connect_controls.entry(ssid).or_insert(control);
        }
    }

    /// Show a blocking confirmation
    pub fn set_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_idle() {
        let model = Model::default();
        for feature in Feature::ALL {
            let state = model.feature(feature);
            assert!(!state.is_busy());
            assert!(!state.button().is_disabled());
            assert_eq!(state.button().label(), feature.binding().idle_label);
        }
        assert!(model.connect_controls.is_empty());
        assert!(model.alert.is_none());
    }

    #[test]
    fn registry_drops_stale_idle_controls() {
        let mut model = Model::default();
        model.register_connect_controls(["home", "office"]);
        model.register_connect_controls(["home"]);

        assert!(model.connect_controls.contains_key("home"));
        assert!(!model.connect_controls.contains_key("office"));
    }

    #[test]
    fn registry_keeps_controls_with_request_in_flight() {
        let mut model = Model::default();
        model.register_connect_controls(["home", "office"]);
        model.connect_control_mut("office").disable();

        model.register_connect_controls(["home"]);

        let office = &model.connect_controls["office"];
        assert!(office.is_disabled());
    }

    #[test]
    fn rescan_does_not_reset_busy_control() {
        let mut model = Model::default();
        model.connect_control_mut("home").disable();
        model.register_connect_controls(["home"]);
        assert!(model.connect_controls["home"].is_disabled());
    }
}
