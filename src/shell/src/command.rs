use anyhow::{bail, Result};
use device_panel_core::events::{NtpEvent, RfEvent, StatusEvent, WifiEvent};
use device_panel_core::{Event, Feature};

pub const USAGE: &str = "usage: device-panel <status | scan | connect <ssid> | ntp <domain> | rf [seconds]>";

/// One panel trigger selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    Status,
    Scan,
    Connect { ssid: String },
    Ntp { domain: String },
    Rf { duration: String },
}

impl PanelCommand {
    /// Parse the arguments following the program name
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let Some(name) = args.next() else {
            bail!("missing command\n{USAGE}");
        };
        let rest: Vec<String> = args.collect();

        let command = match (name.as_str(), rest.as_slice()) {
            ("status", []) => Self::Status,
            ("scan", []) => Self::Scan,
            ("connect", [ssid]) => Self::Connect { ssid: ssid.clone() },
            // Inputs are passed on untouched, validation belongs to the panel.
            ("ntp", []) => Self::Ntp {
                domain: String::new(),
            },
            ("ntp", [domain]) => Self::Ntp {
                domain: domain.clone(),
            },
            ("rf", []) => Self::Rf {
                duration: String::new(),
            },
            ("rf", [duration]) => Self::Rf {
                duration: duration.clone(),
            },
            _ => bail!("invalid arguments: {name} {}\n{USAGE}", rest.join(" ")),
        };

        Ok(command)
    }

    /// Feature whose output area shows the result, `None` for connect
    pub fn feature(&self) -> Option<Feature> {
        match self {
            Self::Status => Some(Feature::Status),
            Self::Scan => Some(Feature::WifiScan),
            Self::Connect { .. } => None,
            Self::Ntp { .. } => Some(Feature::Ntp),
            Self::Rf { .. } => Some(Feature::RfScan),
        }
    }

    /// Trigger event, given the password prompt answer for connect
    pub fn into_event(self, password: Option<String>) -> Event {
        match self {
            Self::Status => Event::Status(StatusEvent::Fetch),
            Self::Scan => Event::Wifi(WifiEvent::Scan),
            Self::Connect { ssid } => Event::Wifi(WifiEvent::Connect {
                ssid_attr: urlencoding::encode(&ssid).into_owned(),
                password,
            }),
            Self::Ntp { domain } => Event::Ntp(NtpEvent::Set { domain }),
            Self::Rf { duration } => Event::Rf(RfEvent::Scan { duration }),
        }
    }
}
