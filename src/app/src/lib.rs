pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod markup;
pub mod model;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    events::Event,
    http_helpers::{
        build_query_url, build_url, decode_api_response, decode_report_response, map_http_error,
        process_api_response, process_report_response, BASE_URL,
    },
    model::Model,
    types::*,
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
