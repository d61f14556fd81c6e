//! Configuration du pont
//!
//! Fichier JSON optionnel ; les valeurs par défaut correspondent à
//! l'application assistant.

use crate::bus::PERFORM_GLOBAL_ACTION;
use crate::ipc::SYSTEM_CONTROL_CHANNEL;
use crate::platform::{AppIdentity, PlatformVersion, ServiceComponent};
use crate::settings::{InMemorySettings, ACCESSIBILITY_ENABLED, ENABLED_ACCESSIBILITY_SERVICES};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Erreurs de configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Erreur d'E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON invalide: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration du pont et de l'hôte simulé
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Nom de package de l'application
    pub package_name: String,
    /// Nom canonique de la classe du service d'accessibilité
    pub service_class: String,
    /// Nom du canal de méthodes
    pub channel: String,
    /// Action publiée sur le bus
    pub action: String,
    /// Niveau d'API de la plateforme
    pub sdk_int: u32,
    /// Commande ouvrant les paramètres d'accessibilité
    pub settings_command: Vec<String>,
    /// Valeur initiale de `accessibility_enabled`
    pub accessibility_enabled: Option<i32>,
    /// Valeur initiale de `enabled_accessibility_services`
    pub enabled_services: Option<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            package_name: "com.aicai.app.aicai_assistant".to_string(),
            service_class: "com.aicai.app.aicai_assistant.GlobalActionService".to_string(),
            channel: SYSTEM_CONTROL_CHANNEL.to_string(),
            action: PERFORM_GLOBAL_ACTION.to_string(),
            sdk_int: 34,
            settings_command: vec![
                "gnome-control-center".to_string(),
                "universal-access".to_string(),
            ],
            accessibility_enabled: None,
            enabled_services: None,
        }
    }
}

impl BridgeConfig {
    /// Charge la config, ou retourne les valeurs par défaut
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match Self::read(path) {
                Ok(config) => {
                    tracing::info!("Config chargée depuis {}", path.display());
                    return config;
                }
                Err(e) => tracing::warn!("Config invalide, valeurs par défaut: {}", e),
            }
        }
        Self::default()
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Sauvegarde la config sur disque
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::info!("Config sauvegardée dans {}", path.display());
        Ok(())
    }

    pub fn identity(&self) -> AppIdentity {
        AppIdentity::new(&self.package_name)
    }

    pub fn service_component(&self) -> ServiceComponent {
        ServiceComponent::new(&self.package_name, &self.service_class)
    }

    pub fn platform(&self) -> PlatformVersion {
        PlatformVersion::new(self.sdk_int)
    }

    /// Magasin de paramètres initialisé avec les valeurs configurées
    pub fn initial_settings(&self) -> InMemorySettings {
        let settings = InMemorySettings::new();
        if let Some(flag) = self.accessibility_enabled {
            settings.put_int(ACCESSIBILITY_ENABLED, flag);
        }
        if let Some(ref services) = self.enabled_services {
            settings.put_string(ENABLED_ACCESSIBILITY_SERVICES, services);
        }
        settings
    }
}
