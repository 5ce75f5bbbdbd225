use crux_core::{render::render, Command};

use super::{complete_feature, reject_input};
use crate::events::{Event, NtpEvent};
use crate::markup::{format_ntp_success, NTP_DOMAIN_REQUIRED};
use crate::model::Model;
use crate::types::{Feature, NtpSetRequest};
use crate::{api_post, build_url, Effect};

/// Handle NTP configuration events
pub fn handle(event: NtpEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        NtpEvent::Set { domain } => {
            let domain = domain.trim().to_string();
            if domain.is_empty() {
                return reject_input(model, Feature::Ntp, NTP_DOMAIN_REQUIRED);
            }

            model.ntp.begin();

            let request = NtpSetRequest {
                ntp_domain: domain.clone(),
            };

            match api_post!(build_url(Feature::Ntp.binding().endpoint), body_json: &request,
                then: move |result| Event::Ntp(NtpEvent::SetResponse { domain, result })
            ) {
                Ok(cmd) => Command::all([render(), cmd]),
                Err(e) => {
                    model.ntp.show_error(&format!("Failed to create NTP request: {e}"));
                    model.ntp.finish();
                    render()
                }
            }
        }

        NtpEvent::SetResponse { domain, result } => {
            complete_feature(model, Feature::Ntp, result, |_ack| {
                format_ntp_success(&domain)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::error_html;
    use crate::types::{ApiAck, ApiError};

    #[test]
    fn empty_domain_shows_inline_error_without_busy_state() {
        let mut model = Model::default();

        let _ = handle(
            NtpEvent::Set {
                domain: "   ".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.ntp.output(), error_html(NTP_DOMAIN_REQUIRED));
        assert!(!model.ntp.is_busy());
        assert!(!model.ntp.button().is_disabled());
    }

    #[test]
    fn set_enters_busy_state() {
        let mut model = Model::default();

        let _ = handle(
            NtpEvent::Set {
                domain: " pool.ntp.org ".to_string(),
            },
            &mut model,
        );

        assert!(model.ntp.is_busy());
        assert!(model.ntp.button().is_disabled());
        assert!(model.ntp.output().is_empty());
    }

    #[test]
    fn success_embeds_submitted_domain() {
        let mut model = Model::default();
        model.ntp.begin();

        let _ = handle(
            NtpEvent::SetResponse {
                domain: "pool.ntp.org".to_string(),
                result: Ok(ApiAck {
                    success: Some(true),
                    message: Some("NTPS sync ok".to_string()),
                }),
            },
            &mut model,
        );

        assert_eq!(model.ntp.output(), format_ntp_success("pool.ntp.org"));
        assert!(!model.ntp.is_busy());
        assert!(!model.ntp.has_error());
        assert_eq!(model.ntp.button().label(), "Set NTP Server");
    }

    #[test]
    fn failure_restores_button() {
        let mut model = Model::default();
        model.ntp.begin();

        let _ = handle(
            NtpEvent::SetResponse {
                domain: "pool.ntp.org".to_string(),
                result: Err(ApiError::Rejected("Failed to sync time with NTP".to_string())),
            },
            &mut model,
        );

        assert_eq!(model.ntp.output(), error_html("Failed to sync time with NTP"));
        assert!(!model.ntp.button().is_disabled());
        assert!(model.ntp.has_error());
    }
}
