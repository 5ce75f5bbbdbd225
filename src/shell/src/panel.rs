use std::collections::VecDeque;

use anyhow::{Context, Result};
use crux_core::Core;
use device_panel_core::{App, Effect, Event, Model};
use log::debug;

use crate::transport::DeviceTransport;

/// Drives the panel core to completion for each event
pub struct Panel {
    core: Core<App>,
    transport: DeviceTransport,
}

impl Panel {
    pub fn new(transport: DeviceTransport, utc_offset_minutes: i32) -> Self {
        let core = Core::<App>::new();
        // Initialization only renders.
        let _ = core.process_event(Event::Initialize { utc_offset_minutes });
        Self { core, transport }
    }

    /// Process `event` and every effect it causes, returning the settled view
    pub async fn dispatch(&self, event: Event) -> Result<Model> {
        let mut pending: VecDeque<Effect> = self.core.process_event(event).into();

        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::Render(_) => debug!("render"),
                Effect::Http(mut request) => {
                    let result = self.transport.execute(&request.operation).await;
                    let effects = self
                        .core
                        .resolve(&mut request, result)
                        .context("failed to resolve http effect")?;
                    pending.extend(effects);
                }
            }
        }

        Ok(self.core.view())
    }
}
