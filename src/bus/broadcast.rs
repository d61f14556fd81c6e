//! Diffusion des messages vers les récepteurs enregistrés
//!
//! Chaque enregistrement possède sa propre file non bornée : `send` ne
//! bloque jamais et ne signale aucune erreur à l'émetteur.

use super::message::CommandMessage;
use crate::platform::{AppIdentity, ReceiverExport};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// Identifiant d'un récepteur enregistré
pub type ReceiverId = u64;

struct Receiver {
    action: String,
    package: String,
    export: ReceiverExport,
    tx: mpsc::UnboundedSender<CommandMessage>,
}

impl Receiver {
    fn accepts(&self, msg: &CommandMessage) -> bool {
        if msg.action != self.action {
            return false;
        }
        if let Some(ref target) = msg.target_package {
            if *target != self.package {
                return false;
            }
        }
        match self.export {
            ReceiverExport::NotExported => msg.sender_package == self.package,
            ReceiverExport::Legacy => true,
        }
    }
}

#[derive(Default)]
struct BusInner {
    next_id: ReceiverId,
    receivers: HashMap<ReceiverId, Receiver>,
}

/// Bus de messages partagé (clonable, une seule instance logique)
#[derive(Clone, Default)]
pub struct MessageBus {
    inner: Arc<Mutex<BusInner>>,
}

/// Côté consommateur d'un enregistrement
pub struct Registration {
    id: ReceiverId,
    rx: mpsc::UnboundedReceiver<CommandMessage>,
}

impl Registration {
    pub fn id(&self) -> ReceiverId {
        self.id
    }

    /// Attend le prochain message ; `None` une fois désenregistré
    pub async fn recv(&mut self) -> Option<CommandMessage> {
        self.rx.recv().await
    }

    /// Message déjà en file, sans attendre
    pub fn try_recv(&mut self) -> Option<CommandMessage> {
        self.rx.try_recv().ok()
    }
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BusInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enregistre un récepteur pour `action`, appartenant à `owner`
    pub fn register(
        &self,
        action: &str,
        owner: &AppIdentity,
        export: ReceiverExport,
    ) -> Registration {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.receivers.insert(
            id,
            Receiver {
                action: action.to_string(),
                package: owner.package_name().to_string(),
                export,
                tx,
            },
        );

        tracing::debug!("Récepteur {} enregistré sur {} ({:?})", id, action, export);
        Registration { id, rx }
    }

    /// Retire un récepteur ; retourne `false` s'il n'existait pas
    pub fn unregister(&self, id: ReceiverId) -> bool {
        let removed = self.lock().receivers.remove(&id).is_some();
        if removed {
            tracing::debug!("Récepteur {} désenregistré", id);
        }
        removed
    }

    /// Publie un message (fire-and-forget)
    ///
    /// Le package de l'émetteur est apposé par le bus. Retourne le nombre
    /// de récepteurs auxquels le message a été remis en file.
    pub fn send(&self, sender: &AppIdentity, mut msg: CommandMessage) -> usize {
        msg.sender_package = sender.package_name().to_string();

        let inner = self.lock();
        let mut delivered = 0;
        for (id, receiver) in inner.receivers.iter().filter(|(_, r)| r.accepts(&msg)) {
            if receiver.tx.send(msg.clone()).is_ok() {
                delivered += 1;
            } else {
                tracing::debug!("Récepteur {} fermé, message ignoré", id);
            }
        }

        if delivered == 0 {
            tracing::trace!("Aucun récepteur pour {}", msg.action);
        }
        delivered
    }

    /// Nombre de récepteurs enregistrés sur `action`
    pub fn receiver_count(&self, action: &str) -> usize {
        self.lock()
            .receivers
            .values()
            .filter(|r| r.action == action)
            .count()
    }
}
