//! Global Action Bridge - hôte en ligne de commande
//!
//! Assemble le bus, le service et le pont, puis lit un appel de méthode
//! JSON par ligne sur l'entrée standard.

use anyhow::Context;
use global_action_bridge::ipc::{CommandNavigator, MethodCall, SystemControlBridge};
use global_action_bridge::service::{GlobalAction, GlobalActionService, TracingPerformer};
use global_action_bridge::settings::{
    EnablementProber, ACCESSIBILITY_ENABLED, ENABLED_ACCESSIBILITY_SERVICES,
};
use global_action_bridge::{bus::MessageBus, BridgeConfig, ServiceState};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_ENV: &str = "GLOBAL_ACTION_BRIDGE_CONFIG";

fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map(PathBuf::from)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialiser le logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "global_action_bridge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Global Action Bridge v{}", env!("CARGO_PKG_VERSION"));

    let config = config_path()
        .map(|path| BridgeConfig::load(&path))
        .unwrap_or_default();

    let bus = MessageBus::new();
    let settings = Arc::new(config.initial_settings());

    let mut service = GlobalActionService::new(
        bus.clone(),
        config.identity(),
        config.platform(),
        Arc::new(TracingPerformer),
    )
    .with_action(&config.action);

    let prober = EnablementProber::new(settings.clone(), config.service_component());
    let bridge = SystemControlBridge::new(
        bus,
        config.identity(),
        prober,
        Arc::new(CommandNavigator::new(config.settings_command.clone())),
    )
    .with_action(&config.action);

    tracing::info!("Canal {} prêt", config.channel);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Lecture de stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "connect" => {
                if let Err(e) = service.on_service_connected() {
                    tracing::warn!("{}", e);
                }
            }
            "destroy" => {
                if let Err(e) = service.on_destroy().await {
                    tracing::warn!("{}", e);
                }
            }
            "interrupt" => service.on_interrupt(),
            "enable" => {
                settings.put_int(ACCESSIBILITY_ENABLED, 1);
                settings.put_string(
                    ENABLED_ACCESSIBILITY_SERVICES,
                    &config.service_component().flatten_to_string(),
                );
            }
            "disable" => settings.put_int(ACCESSIBILITY_ENABLED, 0),
            _ if line.starts_with('{') => match serde_json::from_str::<MethodCall>(line) {
                Ok(call) => {
                    let result = bridge.handle(&call);
                    println!("{}", serde_json::to_string(&result)?);
                }
                Err(e) => tracing::warn!("Appel invalide: {}", e),
            },
            name => match GlobalAction::from_name(name) {
                Some(id) => {
                    bridge.perform_action(Some(id));
                }
                None => tracing::warn!("Commande inconnue: {}", name),
            },
        }
    }

    if service.state() == ServiceState::Subscribed {
        service.on_destroy().await.context("Arrêt du service")?;
    }
    Ok(())
}
