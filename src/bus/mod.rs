//! Bus de messages local
//!
//! Modélise la diffusion de messages de l'OS : un émetteur publie sans
//! attendre, chaque récepteur enregistré consomme sa propre file.

mod broadcast;
mod message;

pub use broadcast::{MessageBus, ReceiverId, Registration};
pub use message::{CommandMessage, EXTRA_ACTION_ID, PERFORM_GLOBAL_ACTION};
