//! API d'action privilégiée

/// Identifiants d'actions globales connus de la plateforme
///
/// L'identifiant reste opaque pour le service : ces constantes ne servent
/// qu'à nommer les actions côté CLI.
pub struct GlobalAction;

impl GlobalAction {
    pub const BACK: i32 = 1;
    pub const HOME: i32 = 2;
    pub const RECENTS: i32 = 3;
    pub const NOTIFICATIONS: i32 = 4;
    pub const QUICK_SETTINGS: i32 = 5;
    pub const POWER_DIALOG: i32 = 6;
    pub const TOGGLE_SPLIT_SCREEN: i32 = 7;
    pub const LOCK_SCREEN: i32 = 8;
    pub const TAKE_SCREENSHOT: i32 = 9;

    /// Résout un nom d'action (`home`, `back`...) ou un entier
    pub fn from_name(name: &str) -> Option<i32> {
        match name.to_lowercase().as_str() {
            "back" => Some(Self::BACK),
            "home" => Some(Self::HOME),
            "recents" => Some(Self::RECENTS),
            "notifications" => Some(Self::NOTIFICATIONS),
            "quick_settings" => Some(Self::QUICK_SETTINGS),
            "power_dialog" => Some(Self::POWER_DIALOG),
            "toggle_split_screen" => Some(Self::TOGGLE_SPLIT_SCREEN),
            "lock_screen" => Some(Self::LOCK_SCREEN),
            "take_screenshot" => Some(Self::TAKE_SCREENSHOT),
            other => other.parse().ok(),
        }
    }
}

/// Capacité privilégiée accordée par l'OS au service
#[cfg_attr(test, mockall::automock)]
pub trait GlobalActionPerformer: Send + Sync {
    /// Exécute l'action globale ; `false` si l'OS la refuse
    fn perform_global_action(&self, action_id: i32) -> bool;
}

/// Implémentation sans OS : journalise l'action
#[derive(Debug, Default)]
pub struct TracingPerformer;

impl GlobalActionPerformer for TracingPerformer {
    fn perform_global_action(&self, action_id: i32) -> bool {
        tracing::info!("Action globale exécutée: {}", action_id);
        true
    }
}
