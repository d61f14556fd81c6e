//! Global Action Bridge - Pont UI ↔ service d'accessibilité
//!
//! Relaie les demandes d'action globale de l'UI vers un service
//! privilégié via un bus de messages local, et indique si ce service est
//! activé d'après les paramètres système.

pub mod bus;
pub mod config;
pub mod ipc;
pub mod platform;
pub mod service;
pub mod settings;

pub use config::BridgeConfig;
pub use ipc::{MethodCall, MethodResult, SystemControlBridge};
pub use service::{GlobalActionService, ServiceState};
