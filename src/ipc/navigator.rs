//! Navigation vers les écrans de paramètres de l'OS

use std::process::{Command, Stdio};
use thiserror::Error;

/// Intent de navigation sans paramètre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub action: String,
}

impl NavigationIntent {
    /// Écran des paramètres d'accessibilité
    pub const ACCESSIBILITY_SETTINGS: &'static str = "android.settings.ACCESSIBILITY_SETTINGS";

    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
        }
    }

    pub fn accessibility_settings() -> Self {
        Self::new(Self::ACCESSIBILITY_SETTINGS)
    }
}

/// Erreurs de navigation
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Aucun gestionnaire pour {0}")]
    NoHandler(String),

    #[error("Lancement impossible: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Lance l'écran correspondant à un intent
#[cfg_attr(test, mockall::automock)]
pub trait SettingsNavigator: Send + Sync {
    fn start_activity(&self, intent: &NavigationIntent) -> Result<(), NavigationError>;
}

/// Navigateur qui lance une commande externe (ex: panneau de contrôle)
#[derive(Debug, Clone, Default)]
pub struct CommandNavigator {
    command: Vec<String>,
}

impl CommandNavigator {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl SettingsNavigator for CommandNavigator {
    fn start_activity(&self, intent: &NavigationIntent) -> Result<(), NavigationError> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(NavigationError::NoHandler(intent.action.clone()));
        };

        tracing::debug!("Ouverture de {} via {}", intent.action, program);
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_has_no_handler() {
        let navigator = CommandNavigator::default();
        let err = navigator
            .start_activity(&NavigationIntent::accessibility_settings())
            .unwrap_err();
        assert!(matches!(err, NavigationError::NoHandler(_)));
    }

    #[test]
    fn test_missing_program() {
        let navigator = CommandNavigator::new(vec!["/nonexistent/settings-panel".to_string()]);
        let err = navigator
            .start_activity(&NavigationIntent::accessibility_settings())
            .unwrap_err();
        assert!(matches!(err, NavigationError::Spawn(_)));
    }
}
