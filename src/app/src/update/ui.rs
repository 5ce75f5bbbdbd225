use crux_core::{render::render, Command};

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::update_field;
use crate::Effect;

/// Handle UI-related events (dismiss alert, clear output)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::DismissAlert => update_field!(model.alert, None),
        UiEvent::ClearOutput(feature) => {
            model.feature_mut(feature).clear_output();
            render()
        }
    }
}
