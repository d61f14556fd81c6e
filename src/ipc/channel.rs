//! Types du canal de méthodes UI ↔ Core

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Nom du canal de méthodes exposé à l'UI
pub const SYSTEM_CONTROL_CHANNEL: &str = "com.aicai.app/system_control";

/// Appel de méthode reçu de l'UI : un nom et des arguments nommés
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_argument(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.to_string(), value.into());
        self
    }

    /// Argument entier ; `None` si absent, non entier ou hors plage `i32`
    pub fn int_argument(&self, key: &str) -> Option<i32> {
        self.arguments
            .get(key)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
    }
}

/// Résultat renvoyé à l'UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResult {
    /// Succès avec une valeur (éventuellement `null`)
    Success { value: Value },
    /// Méthode inconnue ; ni succès ni erreur
    NotImplemented,
}

impl MethodResult {
    pub fn success(value: impl Into<Value>) -> Self {
        MethodResult::Success {
            value: value.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_from_json() {
        let call: MethodCall =
            serde_json::from_str(r#"{"method":"performGlobalAction","arguments":{"actionId":2}}"#)
                .unwrap();
        assert_eq!(call.method, "performGlobalAction");
        assert_eq!(call.int_argument("actionId"), Some(2));

        let call: MethodCall = serde_json::from_str(r#"{"method":"isServiceEnabled"}"#).unwrap();
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn test_int_argument_types() {
        let call = MethodCall::new("m")
            .with_argument("a", "2")
            .with_argument("b", 2.5)
            .with_argument("c", json!(i64::MAX));
        assert_eq!(call.int_argument("a"), None);
        assert_eq!(call.int_argument("b"), None);
        assert_eq!(call.int_argument("c"), None);
        assert_eq!(call.int_argument("missing"), None);
    }

    #[test]
    fn test_result_serialization() {
        let json = serde_json::to_string(&MethodResult::success(true)).unwrap();
        assert_eq!(json, r#"{"status":"success","value":true}"#);

        let json = serde_json::to_string(&MethodResult::success(Value::Null)).unwrap();
        assert_eq!(json, r#"{"status":"success","value":null}"#);

        let json = serde_json::to_string(&MethodResult::NotImplemented).unwrap();
        assert_eq!(json, r#"{"status":"not_implemented"}"#);
    }
}
