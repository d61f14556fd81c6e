//! Module du service d'accessibilité privilégié
//!
//! Reçoit les commandes publiées sur le bus et déclenche les actions
//! système globales.

mod action;
mod executor;

pub use action::{GlobalAction, GlobalActionPerformer, TracingPerformer};
pub use executor::{AccessibilityEvent, GlobalActionService, ServiceError, ServiceState};

#[cfg(test)]
pub use action::MockGlobalActionPerformer;
