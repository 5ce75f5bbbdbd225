use crux_core::Command;

use super::complete_feature;
use crate::events::{Event, StatusEvent};
use crate::feature_get;
use crate::markup::format_status;
use crate::model::Model;
use crate::types::Feature;
use crate::{build_url, Effect};

/// Handle system status events
pub fn handle(event: StatusEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        StatusEvent::Fetch => feature_get!(
            Status,
            StatusEvent,
            model,
            Feature::Status,
            build_url(Feature::Status.binding().endpoint),
            FetchResponse
        ),

        StatusEvent::FetchResponse(result) => {
            let utc_offset_minutes = model.utc_offset_minutes;
            complete_feature(model, Feature::Status, result, |report| {
                format_status(report, utc_offset_minutes)
            })
        }
    }
}
