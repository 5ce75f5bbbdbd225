mod ntp;
mod rf;
mod status;
mod ui;
mod wifi;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::types::{ApiError, Feature};
use crate::update_field;
use crate::Effect;

/// Main update dispatcher - routes events to feature handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize { utc_offset_minutes } => {
            update_field!(model.utc_offset_minutes, utc_offset_minutes)
        }
        Event::Status(event) => status::handle(event, model),
        Event::Wifi(event) => wifi::handle(event, model),
        Event::Ntp(event) => ntp::handle(event, model),
        Event::Rf(event) => rf::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}

/// Completion half of the generic request/render operation.
///
/// Renders the formatter's markup on success or an inline error on failure,
/// then leaves the feature idle whatever the outcome.
fn complete_feature<T>(
    model: &mut Model,
    feature: Feature,
    result: Result<T, ApiError>,
    formatter: impl FnOnce(&T) -> String,
) -> Command<Effect, Event> {
    let state = model.feature_mut(feature);

    match result {
        Ok(payload) => state.show_output(formatter(&payload)),
        Err(e) => {
            log::warn!("{feature:?} failed: {e}");
            state.show_error(&e.to_string());
        }
    }
    state.finish();

    render()
}

/// Short-circuit for client-side validation failures: inline error, no request,
/// busy state untouched.
fn reject_input(model: &mut Model, feature: Feature, message: &str) -> Command<Effect, Event> {
    log::info!("{feature:?} input rejected: {message}");
    model.feature_mut(feature).show_error(message);
    render()
}
