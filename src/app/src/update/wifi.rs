use crux_core::{render::render, Command};

use super::complete_feature;
use crate::events::{Event, WifiEvent};
use crate::markup::format_wifi_scan;
use crate::model::Model;
use crate::types::{
    Alert, ApiAck, ApiError, Feature, WifiConnectRequest, WifiNetwork, FALLBACK_ERROR,
};
use crate::{api_post, build_url, feature_get, Effect};

const CONNECT_ENDPOINT: &str = "/api/v1/wifi/connect";

/// Handle Wi-Fi scan and connect events
pub fn handle(event: WifiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        WifiEvent::Scan => feature_get!(
            Wifi,
            WifiEvent,
            model,
            Feature::WifiScan,
            build_url(Feature::WifiScan.binding().endpoint),
            ScanResponse
        ),

        WifiEvent::ScanResponse(result) => {
            if let Ok(report) = &result {
                let ssids: Vec<String> = report.networks().iter().map(WifiNetwork::ssid).collect();
                model.register_connect_controls(ssids.iter().map(String::as_str));
            }
            complete_feature(model, Feature::WifiScan, result, format_wifi_scan)
        }

        WifiEvent::Connect {
            ssid_attr,
            password,
        } => handle_connect(&ssid_attr, password, model),

        WifiEvent::ConnectResponse { ssid, result } => {
            model.set_alert(connect_outcome(&ssid, result));
            model.connect_control_mut(&ssid).restore();
            render()
        }
    }
}

fn handle_connect(
    ssid_attr: &str,
    password: Option<String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    let ssid = match urlencoding::decode(ssid_attr) {
        Ok(ssid) => ssid.into_owned(),
        Err(e) => {
            log::warn!("ignoring connect control with malformed SSID attribute: {e}");
            return Command::done();
        }
    };

    let Some(password) = password.filter(|p| !p.trim().is_empty()) else {
        log::info!("connect to {ssid:?} abandoned: no password entered");
        return Command::done();
    };

    model.connect_control_mut(&ssid).disable();

    let request = WifiConnectRequest {
        ssid: ssid.clone(),
        password,
    };
    let response_ssid = ssid.clone();

    match api_post!(build_url(CONNECT_ENDPOINT), body_json: &request,
        then: move |result| Event::Wifi(WifiEvent::ConnectResponse { ssid: response_ssid, result })
    ) {
        Ok(cmd) => Command::all([render(), cmd]),
        Err(e) => {
            model.set_alert(Alert::failure(format!("Connection error: {e}")));
            model.connect_control_mut(&ssid).restore();
            render()
        }
    }
}

/// Text of the blocking confirmation after a connect attempt
fn connect_outcome(ssid: &str, result: Result<ApiAck, ApiError>) -> Alert {
    match result {
        Ok(ApiAck {
            success: Some(true),
            ..
        }) => Alert::success(format!("Successfully connected to {ssid}")),
        Ok(ack) => Alert::failure(format!(
            "Connection failed: {}",
            ack.message.as_deref().unwrap_or(FALLBACK_ERROR)
        )),
        Err(ApiError::Rejected(message)) => {
            Alert::failure(format!("Connection failed: {message}"))
        }
        Err(e) => Alert::failure(format!("Connection error: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_success_is_required() {
        let alert = connect_outcome("home", Ok(ApiAck::default()));
        assert_eq!(alert, Alert::failure("Connection failed: Unknown error"));

        let alert = connect_outcome(
            "home",
            Ok(ApiAck {
                success: Some(true),
                message: None,
            }),
        );
        assert_eq!(alert, Alert::success("Successfully connected to home"));
    }

    #[test]
    fn rejection_and_transport_errors_are_worded_apart() {
        let alert = connect_outcome("home", Err(ApiError::Rejected("boom".to_string())));
        assert_eq!(alert.text, "Connection failed: boom");

        let alert = connect_outcome("home", Err(ApiError::Transport("refused".to_string())));
        assert_eq!(alert.text, "Connection error: refused");
    }

    #[test]
    fn cancelled_prompt_changes_nothing() {
        let mut model = Model::default();
        model.register_connect_controls(["home"]);
        let before = model.clone();

        let mut cmd = handle_connect("home", None, &mut model);

        assert!(cmd.is_done());
        assert_eq!(model, before);
    }

    #[test]
    fn blank_password_changes_nothing() {
        let mut model = Model::default();
        let before = model.clone();

        let mut cmd = handle_connect("home", Some("   ".to_string()), &mut model);

        assert!(cmd.is_done());
        assert_eq!(model, before);
    }

    #[test]
    fn malformed_attribute_is_ignored() {
        let mut model = Model::default();
        let mut cmd = handle_connect("%FF%FE", Some("secret".to_string()), &mut model);
        assert!(cmd.is_done());
        assert!(model.connect_controls.is_empty());
    }
}
