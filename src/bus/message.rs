//! Message de commande transporté par le bus

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Action des demandes d'action globale
pub const PERFORM_GLOBAL_ACTION: &str = "com.aicai.app.PERFORM_GLOBAL_ACTION";

/// Nom de l'extra portant l'identifiant d'action
pub const EXTRA_ACTION_ID: &str = "actionId";

/// Message one-way publié sur le bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandMessage {
    /// Nom d'action (canal logique)
    pub action: String,
    /// Package de l'émetteur, renseigné par le bus
    #[serde(default)]
    pub sender_package: String,
    /// Package destinataire ; `None` = tous les récepteurs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_package: Option<String>,
    /// Extras nommés
    #[serde(default)]
    pub extras: Map<String, Value>,
}

impl CommandMessage {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            sender_package: String::new(),
            target_package: None,
            extras: Map::new(),
        }
    }

    /// Restreint la livraison aux récepteurs d'un package
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.target_package = Some(package.into());
        self
    }

    pub fn put_int_extra(&mut self, key: &str, value: i32) {
        self.extras.insert(key.to_string(), Value::from(value));
    }

    /// Lit un extra entier ; `default` si absent ou d'un autre type
    pub fn get_int_extra(&self, key: &str, default: i32) -> i32 {
        self.extras
            .get(key)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(default)
    }
}
