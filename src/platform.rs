//! Identité de l'application et version de la plateforme hôte
//!
//! Ces valeurs sont fournies par l'OS dans une vraie application ; ici
//! elles sont injectées explicitement dans chaque composant.

use serde::{Deserialize, Serialize};

/// Niveau d'API à partir duquel les récepteurs non exportés existent
pub const SDK_TIRAMISU: u32 = 33;

/// Identité de l'application (nom de package)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppIdentity {
    package_name: String,
}

impl AppIdentity {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }

    /// Nom de package de l'application
    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}

/// Nom complet d'un composant de service : `<package>/<classe>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceComponent {
    pub package_name: String,
    pub class_name: String,
}

impl ServiceComponent {
    pub fn new(package_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
        }
    }

    /// Forme aplatie telle que stockée dans les paramètres système
    pub fn flatten_to_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.package_name, self.class_name)
    }
}

/// Version de la plateforme hôte
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlatformVersion {
    pub sdk_int: u32,
}

impl PlatformVersion {
    pub fn new(sdk_int: u32) -> Self {
        Self { sdk_int }
    }

    /// Mode d'enregistrement des récepteurs à utiliser sur cette version
    pub fn receiver_export(&self) -> ReceiverExport {
        if self.sdk_int >= SDK_TIRAMISU {
            ReceiverExport::NotExported
        } else {
            ReceiverExport::Legacy
        }
    }
}

/// Mode d'enregistrement d'un récepteur sur le bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverExport {
    /// Seuls les messages émis par la même application sont livrés
    NotExported,
    /// Aucun filtrage sur l'émetteur
    Legacy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_component() {
        let component = ServiceComponent::new("com.app.pkg", "com.app.pkg.Svc");
        assert_eq!(component.flatten_to_string(), "com.app.pkg/com.app.pkg.Svc");
        assert_eq!(component.to_string(), component.flatten_to_string());
    }

    #[test]
    fn test_receiver_export_by_version() {
        assert_eq!(PlatformVersion::new(32).receiver_export(), ReceiverExport::Legacy);
        assert_eq!(
            PlatformVersion::new(SDK_TIRAMISU).receiver_export(),
            ReceiverExport::NotExported
        );
        assert_eq!(PlatformVersion::new(34).receiver_export(), ReceiverExport::NotExported);
    }
}
