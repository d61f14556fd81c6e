//! Commandes du canal `system_control`
//!
//! Ces commandes sont exposées à l'UI. Chaque appel est soit une
//! publication fire-and-forget sur le bus, soit une requête locale.

use super::channel::{MethodCall, MethodResult};
use super::navigator::{NavigationIntent, SettingsNavigator};
use crate::bus::{CommandMessage, MessageBus, EXTRA_ACTION_ID, PERFORM_GLOBAL_ACTION};
use crate::platform::AppIdentity;
use crate::settings::EnablementProber;
use serde_json::Value;
use std::sync::Arc;

/// Noms de méthodes acceptés par le canal
pub mod methods {
    pub const PERFORM_ACTION: &str = "performAction";
    pub const PERFORM_GLOBAL_ACTION: &str = "performGlobalAction";
    pub const OPEN_SETTINGS: &str = "openSettings";
    pub const OPEN_ACCESSIBILITY_SETTINGS: &str = "openAccessibilitySettings";
    pub const QUERY_ENABLED: &str = "queryEnabled";
    pub const IS_SERVICE_ENABLED: &str = "isServiceEnabled";
}

/// Pont entre l'UI et le service privilégié
///
/// Ne partage aucune référence avec le service : seul le bus les relie.
pub struct SystemControlBridge {
    bus: MessageBus,
    identity: AppIdentity,
    action: String,
    prober: EnablementProber,
    navigator: Arc<dyn SettingsNavigator>,
}

impl SystemControlBridge {
    pub fn new(
        bus: MessageBus,
        identity: AppIdentity,
        prober: EnablementProber,
        navigator: Arc<dyn SettingsNavigator>,
    ) -> Self {
        Self {
            bus,
            identity,
            action: PERFORM_GLOBAL_ACTION.to_string(),
            prober,
            navigator,
        }
    }

    /// Remplace le nom d'action publié
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Dispatch d'un appel de méthode
    pub fn handle(&self, call: &MethodCall) -> MethodResult {
        tracing::debug!("Appel de méthode: {}", call.method);

        match call.method.as_str() {
            methods::PERFORM_ACTION | methods::PERFORM_GLOBAL_ACTION => {
                let action_id = call.int_argument(EXTRA_ACTION_ID);
                MethodResult::success(self.perform_action(action_id))
            }
            methods::OPEN_SETTINGS | methods::OPEN_ACCESSIBILITY_SETTINGS => {
                self.open_settings();
                MethodResult::success(Value::Null)
            }
            methods::QUERY_ENABLED | methods::IS_SERVICE_ENABLED => {
                MethodResult::success(self.query_enabled())
            }
            other => {
                tracing::debug!("Méthode non implémentée: {}", other);
                MethodResult::NotImplemented
            }
        }
    }

    /// Demande une action globale au service
    ///
    /// Retourne toujours `true` : l'envoi est best-effort, sans accusé de
    /// réception, même si l'identifiant est invalide ou qu'aucun service
    /// n'écoute.
    ///
    /// # Appel de méthode
    /// ```ignore
    /// channel.invokeMethod("performGlobalAction", {"actionId": 2})
    /// ```
    pub fn perform_action(&self, action_id: Option<i32>) -> bool {
        let mut msg = CommandMessage::new(&self.action).with_package(self.identity.package_name());
        if let Some(id) = action_id {
            msg.put_int_extra(EXTRA_ACTION_ID, id);
        }

        let receivers = self.bus.send(&self.identity, msg);
        tracing::debug!("Action {:?} publiée ({} récepteur(s))", action_id, receivers);
        true
    }

    /// Ouvre les paramètres d'accessibilité de l'OS
    ///
    /// # Appel de méthode
    /// ```ignore
    /// channel.invokeMethod("openAccessibilitySettings")
    /// ```
    pub fn open_settings(&self) {
        let intent = NavigationIntent::accessibility_settings();
        if let Err(e) = self.navigator.start_activity(&intent) {
            tracing::warn!("Ouverture des paramètres impossible: {}", e);
        }
    }

    /// Retourne l'état d'activation du service selon l'OS
    ///
    /// # Appel de méthode
    /// ```ignore
    /// channel.invokeMethod("isServiceEnabled")
    /// ```
    pub fn query_enabled(&self) -> bool {
        self.prober.is_enabled()
    }
}
