//! Détection de l'activation du service d'accessibilité
//!
//! Requête pure sur deux paramètres système, sans cache : le drapeau
//! global et la liste des services activés.

use super::store::{
    SecureSettings, SettingsError, ACCESSIBILITY_ENABLED, ENABLED_ACCESSIBILITY_SERVICES,
};
use crate::platform::ServiceComponent;
use std::collections::HashSet;
use std::sync::Arc;

/// Ensemble des services activés, normalisés en minuscules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnabledServices(HashSet<String>);

impl EnabledServices {
    /// Découpe une liste `a/B:c/D` ; les entrées vides sont ignorées
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(':')
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase)
                .collect(),
        )
    }

    /// Appartenance insensible à la casse
    pub fn contains(&self, service: &str) -> bool {
        self.0.contains(&service.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Vérifie si le service de l'application est actif selon l'OS
#[derive(Clone)]
pub struct EnablementProber {
    settings: Arc<dyn SecureSettings>,
    service: ServiceComponent,
}

impl EnablementProber {
    pub fn new(settings: Arc<dyn SecureSettings>, service: ServiceComponent) -> Self {
        Self { settings, service }
    }

    /// Lit le drapeau global ; une lecture en échec vaut 0
    fn accessibility_flag(&self) -> i32 {
        match self.settings.get_int(ACCESSIBILITY_ENABLED) {
            Ok(flag) => flag,
            Err(SettingsError::NotFound(_)) => 0,
            Err(e) => {
                tracing::warn!("Lecture du drapeau d'accessibilité impossible: {}", e);
                0
            }
        }
    }

    /// `true` si l'accessibilité est active et le service listé
    pub fn is_enabled(&self) -> bool {
        if self.accessibility_flag() != 1 {
            return false;
        }

        let Some(raw) = self.settings.get_string(ENABLED_ACCESSIBILITY_SERVICES) else {
            return false;
        };

        let enabled = EnabledServices::parse(&raw).contains(&self.service.flatten_to_string());
        tracing::debug!("Service {} activé: {}", self.service, enabled);
        enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{InMemorySettings, MockSecureSettings};
    use mockall::predicate::eq;

    const SERVICES: &str = "com.x/Svc:com.app.pkg/com.app.pkg.Svc";

    fn component() -> ServiceComponent {
        ServiceComponent::new("com.app.pkg", "com.app.pkg.Svc")
    }

    fn prober(flag: Option<i32>, services: Option<&str>) -> EnablementProber {
        let settings = InMemorySettings::new();
        if let Some(flag) = flag {
            settings.put_int(ACCESSIBILITY_ENABLED, flag);
        }
        if let Some(services) = services {
            settings.put_string(ENABLED_ACCESSIBILITY_SERVICES, services);
        }
        EnablementProber::new(Arc::new(settings), component())
    }

    #[test]
    fn test_parse_enabled_services() {
        let services = EnabledServices::parse("A/B::c/d:");
        assert_eq!(services.len(), 2);
        assert!(services.contains("a/b"));
        assert!(services.contains("C/D"));
        assert!(EnabledServices::parse("").is_empty());
    }

    #[test]
    fn test_flag_disabled() {
        assert!(!prober(Some(0), Some(SERVICES)).is_enabled());
        assert!(!prober(Some(2), Some(SERVICES)).is_enabled());
    }

    #[test]
    fn test_missing_flag_is_disabled() {
        assert!(!prober(None, Some(SERVICES)).is_enabled());
    }

    #[test]
    fn test_service_listed() {
        assert!(prober(Some(1), Some(SERVICES)).is_enabled());
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(prober(Some(1), Some("COM.APP.PKG/COM.APP.PKG.SVC")).is_enabled());
    }

    #[test]
    fn test_empty_or_absent_services() {
        assert!(!prober(Some(1), Some("")).is_enabled());
        assert!(!prober(Some(1), None).is_enabled());
        assert!(!prober(Some(1), Some("com.x/Svc")).is_enabled());
    }

    #[test]
    fn test_padded_entry_does_not_match() {
        let prober = prober(Some(1), Some("com.x/Svc: com.app.pkg/com.app.pkg.Svc "));
        assert!(!prober.is_enabled());
        assert!(!EnabledServices::parse(" a/b").contains("a/b"));
    }

    #[test]
    fn test_services_not_read_when_disabled() {
        let mut settings = MockSecureSettings::new();
        settings
            .expect_get_int()
            .with(eq(ACCESSIBILITY_ENABLED))
            .times(1)
            .returning(|key| Err(SettingsError::NotFound(key.to_string())));
        settings.expect_get_string().never();

        let prober = EnablementProber::new(Arc::new(settings), component());
        assert!(!prober.is_enabled());
    }

    #[test]
    fn test_invalid_flag_is_disabled() {
        let mut settings = MockSecureSettings::new();
        settings.expect_get_int().returning(|key| {
            Err(SettingsError::InvalidValue {
                key: key.to_string(),
                value: "x".to_string(),
            })
        });
        settings.expect_get_string().never();

        let prober = EnablementProber::new(Arc::new(settings), component());
        assert!(!prober.is_enabled());
    }
}
