use crux_core::{render::render, Command};

use super::{complete_feature, reject_input};
use crate::events::{Event, RfEvent};
use crate::feature_get;
use crate::markup::{format_rf_scan, message_html, RF_DURATION_OUT_OF_RANGE, RF_SCANNING_MESSAGE};
use crate::model::Model;
use crate::types::{parse_scan_duration, Feature};
use crate::{build_query_url, process_report_response, Effect};

/// Handle RF remote scan events
pub fn handle(event: RfEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        RfEvent::Scan { duration } => {
            let Some(secs) = parse_scan_duration(&duration) else {
                return reject_input(model, Feature::RfScan, RF_DURATION_OUT_OF_RANGE);
            };

            let cmd = feature_get!(
                Rf,
                RfEvent,
                model,
                Feature::RfScan,
                build_query_url(Feature::RfScan.binding().endpoint, "duration", secs),
                ScanResponse,
                process: process_report_response
            );
            model
                .rf_scan
                .show_output(message_html(RF_SCANNING_MESSAGE));
            Command::all([cmd, render()])
        }

        RfEvent::ScanResponse(result) => {
            complete_feature(model, Feature::RfScan, result, format_rf_scan)
        }
    }
}
