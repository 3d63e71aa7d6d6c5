//! Contact form submitter.
//!
//! Validates the three fields, posts them as JSON to the leads API, and
//! reports the result with a native alert. The submit control is disabled
//! and relabelled while a request is in flight, which also blocks double
//! submission, and is always restored afterwards.

use serde::Serialize;

use crate::dom::{FormFields, SubmitControl};
use crate::net::transport::{Transport, TransportError, is_success};
use crate::util::dialog::Dialogs;

pub const SENDING_LABEL: &str = "Enviando...";
pub const MISSING_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos.";
pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso! :)";
pub const FAILURE_MESSAGE: &str = "Erro ao enviar a mensagem. Tente novamente mais tarde.";

/// Body of `POST /api/leads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub nome: String,
    pub email: String,
    pub mensagem: String,
}

impl ContactSubmission {
    /// Read and trim the form fields; `None` if any is blank.
    pub fn from_fields(form: &impl FormFields) -> Option<Self> {
        let read = |name: &str| {
            let value = form.field(name).trim().to_owned();
            (!value.is_empty()).then_some(value)
        };
        Some(Self { nome: read("nome")?, email: read("email")?, mensagem: read("mensagem")? })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened.
    Busy,
    /// A field was blank; nothing was sent.
    Invalid,
    Sent,
    Rejected(u16),
    Failed(TransportError),
}

pub struct ContactFormSubmitter<T, D> {
    endpoint: String,
    transport: T,
    dialogs: D,
}

impl<T: Transport, D: Dialogs> ContactFormSubmitter<T, D> {
    /// `endpoint` is the full leads URL, usually [`crate::net::api::leads_endpoint`].
    pub fn new(endpoint: impl Into<String>, transport: T, dialogs: D) -> Self {
        Self { endpoint: endpoint.into(), transport, dialogs }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn submit(&self, form: &impl FormFields, button: &impl SubmitControl) -> SubmitOutcome {
        if button.is_disabled() {
            log::debug!("contact form submit ignored while a request is in flight");
            return SubmitOutcome::Busy;
        }

        let Some(submission) = ContactSubmission::from_fields(form) else {
            self.dialogs.alert(MISSING_FIELDS_MESSAGE);
            return SubmitOutcome::Invalid;
        };

        let original_label = button.label();
        button.set_disabled(true);
        button.set_label(SENDING_LABEL);

        let outcome = match self.transport.post_json(&self.endpoint, &submission).await {
            Ok(status) if is_success(status) => {
                self.dialogs.alert(SUCCESS_MESSAGE);
                form.reset();
                SubmitOutcome::Sent
            }
            Ok(status) => {
                log::warn!("lead submission rejected with status {status}");
                self.dialogs.alert(FAILURE_MESSAGE);
                SubmitOutcome::Rejected(status)
            }
            Err(e) => {
                log::error!("lead submission failed: {e}");
                self.dialogs.alert(FAILURE_MESSAGE);
                SubmitOutcome::Failed(e)
            }
        };

        button.set_label(&original_label);
        button.set_disabled(false);
        outcome
    }
}

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod tests;
