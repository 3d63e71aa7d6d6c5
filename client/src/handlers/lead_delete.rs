//! Admin-panel lead deletion control.
//!
//! One handler serves every `.delete-link`, whichever panel route it
//! posts to; the route comes from the [`DeleteEndpoint`] template.

use crate::dom::Detach;
use crate::net::api::DeleteEndpoint;
use crate::net::transport::{Transport, TransportError, is_success};
use crate::util::dialog::Dialogs;

pub const CONFIRM_MESSAGE: &str = "Tem certeza que deseja deletar este lead?";
pub const ERROR_MESSAGE: &str = "Erro ao deletar lead.";

/// What a click on a delete link ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user dismissed the confirmation.
    Declined,
    /// The link carries no lead id; nothing was sent.
    MissingId,
    /// The server accepted and the link was removed.
    Deleted,
    /// The server answered with a non-2xx status.
    Rejected(u16),
    /// The request never completed.
    Failed(TransportError),
}

pub struct LeadDeleteControl<T, D> {
    endpoint: DeleteEndpoint,
    transport: T,
    dialogs: D,
}

impl<T: Transport, D: Dialogs> LeadDeleteControl<T, D> {
    pub fn new(endpoint: DeleteEndpoint, transport: T, dialogs: D) -> Self {
        Self { endpoint, transport, dialogs }
    }

    /// Handle one click on `link`, whose `data-lead-id` is `lead_id`.
    pub async fn handle_click<E: Detach>(&self, lead_id: Option<&str>, link: &E) -> DeleteOutcome {
        if !self.dialogs.confirm(CONFIRM_MESSAGE) {
            return DeleteOutcome::Declined;
        }

        let Some(id) = lead_id.map(str::trim).filter(|id| !id.is_empty()) else {
            log::warn!("delete link has no data-lead-id; nothing sent");
            return DeleteOutcome::MissingId;
        };

        let url = self.endpoint.url_for(id);
        match self.transport.post_empty(&url).await {
            Ok(status) if is_success(status) => {
                link.detach();
                log::info!("lead {id} deleted");
                DeleteOutcome::Deleted
            }
            Ok(status) => {
                log::warn!("delete of lead {id} rejected with status {status}");
                self.dialogs.alert(ERROR_MESSAGE);
                DeleteOutcome::Rejected(status)
            }
            Err(e) => {
                log::error!("delete of lead {id} failed: {e}");
                DeleteOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "lead_delete_test.rs"]
mod tests;
