//! Module des paramètres système
//!
//! Lecture seule des paramètres persistés par l'OS et détection de
//! l'activation du service d'accessibilité.

mod prober;
mod store;

pub use prober::{EnabledServices, EnablementProber};
pub use store::{
    InMemorySettings, SecureSettings, SettingsError, ACCESSIBILITY_ENABLED,
    ENABLED_ACCESSIBILITY_SERVICES,
};

#[cfg(test)]
pub use store::MockSecureSettings;
