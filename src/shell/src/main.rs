use anyhow::{Context, Result};
use device_panel::{DeviceTransport, Panel, PanelCommand, ShellConfig};
use env_logger::{Builder, Env, Target};
use log::{error, info};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            error!("application error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| writeln!(f, "[{}] {}", record.level(), record.args()));

    // stdout carries the panel output
    builder.target(Target::Stderr).init();

    info!("device-panel version: {}", env!("CARGO_PKG_VERSION"));
}

/// Returns whether the device reported success
async fn run() -> Result<bool> {
    initialize();

    let config = ShellConfig::load().context("failed to load configuration")?;
    let command = PanelCommand::parse(std::env::args().skip(1))?;
    info!("talking to {}", config.device_url);

    let password = match &command {
        PanelCommand::Connect { ssid } => prompt_password(ssid).await?,
        _ => None,
    };

    let feature = command.feature();
    let panel = Panel::new(
        DeviceTransport::new(config.device_url),
        config.utc_offset_minutes,
    );
    let model = panel.dispatch(command.into_event(password)).await?;

    if let Some(feature) = feature {
        let state = model.feature(feature);
        println!("{}", state.output());
        return Ok(!state.has_error());
    }

    match model.alert {
        Some(alert) => {
            println!("{}", alert.text);
            Ok(alert.success)
        }
        None => {
            info!("connect cancelled");
            Ok(true)
        }
    }
}

/// Ask for the network password, `None` when the answer is empty or stdin closed
async fn prompt_password(ssid: &str) -> Result<Option<String>> {
    eprint!("Enter password for {ssid}: ");
    std::io::stderr().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("failed to read password")?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    Ok((!password.is_empty()).then_some(password))
}
