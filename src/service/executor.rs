//! Service d'exécution des actions globales
//!
//! Objet unique et long-vivant : il s'abonne au bus au démarrage du
//! service, se désabonne à sa destruction, et exécute chaque commande
//! valide reçue entre les deux.

use super::action::GlobalActionPerformer;
use crate::bus::{
    CommandMessage, MessageBus, ReceiverId, Registration, EXTRA_ACTION_ID, PERFORM_GLOBAL_ACTION,
};
use crate::platform::{AppIdentity, PlatformVersion};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Erreurs du cycle de vie du service
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Service déjà connecté, réenregistrement non supporté")]
    AlreadyConnected,

    #[error("Service non connecté")]
    NotConnected,

    #[error("Aucun runtime tokio disponible")]
    NoRuntime,

    #[error("Boucle de dispatch interrompue: {0}")]
    DispatchFailed(String),
}

/// État d'abonnement du service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// Aucun récepteur enregistré (état initial et final)
    Unsubscribed,
    /// Récepteur enregistré sur le bus
    Subscribed,
}

/// Événement d'accessibilité transmis par l'OS
#[derive(Debug, Clone, Default)]
pub struct AccessibilityEvent {
    pub event_type: u32,
    pub package_name: Option<String>,
}

struct Subscription {
    receiver_id: ReceiverId,
    stop_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

/// Service d'accessibilité exécutant les actions globales
pub struct GlobalActionService {
    bus: MessageBus,
    identity: AppIdentity,
    platform: PlatformVersion,
    action: String,
    performer: Arc<dyn GlobalActionPerformer>,
    subscription: Option<Subscription>,
    connected_once: bool,
}

impl GlobalActionService {
    /// Crée le service ; rien n'est enregistré avant `on_service_connected`
    pub fn new(
        bus: MessageBus,
        identity: AppIdentity,
        platform: PlatformVersion,
        performer: Arc<dyn GlobalActionPerformer>,
    ) -> Self {
        Self {
            bus,
            identity,
            platform,
            action: PERFORM_GLOBAL_ACTION.to_string(),
            performer,
            subscription: None,
            connected_once: false,
        }
    }

    /// Remplace le nom d'action écouté
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn state(&self) -> ServiceState {
        if self.subscription.is_some() {
            ServiceState::Subscribed
        } else {
            ServiceState::Unsubscribed
        }
    }

    /// Nom d'action écouté
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Démarrage du service : enregistre le récepteur et lance la boucle
    ///
    /// Doit être appelé dans un runtime tokio. Un seul enregistrement est
    /// possible par instance.
    pub fn on_service_connected(&mut self) -> Result<(), ServiceError> {
        if self.connected_once {
            return Err(ServiceError::AlreadyConnected);
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| ServiceError::NoRuntime)?;

        let export = self.platform.receiver_export();
        let registration = self.bus.register(&self.action, &self.identity, export);
        let receiver_id = registration.id();

        let (stop_tx, stop_rx) = mpsc::channel::<()>(1);
        let task = runtime.spawn(dispatch_loop(
            registration,
            stop_rx,
            self.action.clone(),
            Arc::clone(&self.performer),
        ));

        self.subscription = Some(Subscription {
            receiver_id,
            stop_tx,
            task,
        });
        self.connected_once = true;

        tracing::info!("Service connecté (sdk {}, {:?})", self.platform.sdk_int, export);
        Ok(())
    }

    /// Événements d'accessibilité : ignorés, le service n'observe pas l'UI
    pub fn on_accessibility_event(&self, _event: &AccessibilityEvent) {}

    pub fn on_interrupt(&self) {
        tracing::info!("Service interrompu");
    }

    /// Destruction du service : désenregistre et attend la fin de la boucle
    ///
    /// Aucun message n'est plus livré une fois cette méthode terminée.
    pub async fn on_destroy(&mut self) -> Result<(), ServiceError> {
        let subscription = self.subscription.take().ok_or(ServiceError::NotConnected)?;

        self.bus.unregister(subscription.receiver_id);
        let _ = subscription.stop_tx.send(()).await;

        let result = subscription
            .task
            .await
            .map_err(|e| ServiceError::DispatchFailed(e.to_string()));

        tracing::info!("Service détruit");
        result
    }
}

impl Drop for GlobalActionService {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::warn!("Service abandonné sans on_destroy, récepteur retiré");
            self.bus.unregister(subscription.receiver_id);
            subscription.task.abort();
        }
    }
}

/// Boucle de dispatch : un message à la fois, l'arrêt est prioritaire
async fn dispatch_loop(
    mut registration: Registration,
    mut stop_rx: mpsc::Receiver<()>,
    action: String,
    performer: Arc<dyn GlobalActionPerformer>,
) {
    loop {
        tokio::select! {
            biased;
            _ = stop_rx.recv() => break,
            msg = registration.recv() => match msg {
                Some(msg) => handle_command(&action, performer.as_ref(), &msg),
                None => break,
            },
        }
    }
    tracing::debug!("Boucle de dispatch terminée");
}

/// Traite un message de commande reçu
fn handle_command(action: &str, performer: &dyn GlobalActionPerformer, msg: &CommandMessage) {
    if msg.action != action {
        return;
    }

    let action_id = msg.get_int_extra(EXTRA_ACTION_ID, 0);
    tracing::debug!("Demande d'action reçue: {}", action_id);

    if action_id > 0 && !performer.perform_global_action(action_id) {
        tracing::warn!("Action globale {} refusée par la plateforme", action_id);
    }
}
