//! Magasin de paramètres sécurisés

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Drapeau global d'activation de l'accessibilité (entier)
pub const ACCESSIBILITY_ENABLED: &str = "accessibility_enabled";

/// Liste des services d'accessibilité activés, séparés par `:`
pub const ENABLED_ACCESSIBILITY_SERVICES: &str = "enabled_accessibility_services";

/// Erreurs de lecture des paramètres
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Paramètre introuvable: {0}")]
    NotFound(String),

    #[error("Valeur invalide pour {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Accès en lecture aux paramètres persistés par l'OS
#[cfg_attr(test, mockall::automock)]
pub trait SecureSettings: Send + Sync {
    /// Lit un paramètre entier
    fn get_int(&self, key: &str) -> Result<i32, SettingsError>;

    /// Lit un paramètre chaîne ; `None` si absent
    fn get_string(&self, key: &str) -> Option<String>;
}

/// Magasin en mémoire, les valeurs sont stockées sous forme de chaînes
/// comme dans le magasin de l'OS
#[derive(Debug, Default)]
pub struct InMemorySettings {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_int(&self, key: &str, value: i32) {
        self.put_string(key, &value.to_string());
    }

    pub fn put_string(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    pub fn remove(&self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl SecureSettings for InMemorySettings {
    fn get_int(&self, key: &str) -> Result<i32, SettingsError> {
        let value = self
            .get_string(key)
            .ok_or_else(|| SettingsError::NotFound(key.to_string()))?;

        value
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidValue {
                key: key.to_string(),
                value,
            })
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
