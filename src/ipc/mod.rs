//! Module IPC du canal `system_control`
//!
//! Définit les appels de méthode et leur traitement pour la communication
//! UI ↔ service privilégié.

mod channel;
mod commands;
mod navigator;

pub use channel::{MethodCall, MethodResult, SYSTEM_CONTROL_CHANNEL};
pub use commands::{methods, SystemControlBridge};
pub use navigator::{CommandNavigator, NavigationError, NavigationIntent, SettingsNavigator};
