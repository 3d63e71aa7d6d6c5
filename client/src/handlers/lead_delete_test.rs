use futures::executor::block_on;

use super::*;
use crate::testing::{FakeDialogs, FakeElement, FakeTransport, RecordedRequest};

const LEAD_ID: &str = "6f1c2a9e-2b4d-4f7a-9a53-0d6c1e2f3a4b";

fn control<'a>(
    transport: &'a FakeTransport,
    dialogs: &'a FakeDialogs,
) -> LeadDeleteControl<&'a FakeTransport, &'a FakeDialogs> {
    LeadDeleteControl::new(DeleteEndpoint::dashboard(), transport, dialogs)
}

#[test]
fn declined_confirmation_sends_nothing_and_keeps_link() {
    let (transport, dialogs, link) = (FakeTransport::replying(204), FakeDialogs::declining(), FakeElement::default());

    let outcome = block_on(control(&transport, &dialogs).handle_click(Some(LEAD_ID), &link));

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert!(transport.requests().is_empty());
    assert_eq!(link.detached.get(), 0);
    assert_eq!(*dialogs.confirms.borrow(), vec![CONFIRM_MESSAGE.to_owned()]);
    assert!(dialogs.alerts().is_empty());
}

#[test]
fn confirmed_success_removes_link_exactly_once() {
    let (transport, dialogs, link) = (FakeTransport::replying(204), FakeDialogs::accepting(), FakeElement::default());

    let outcome = block_on(control(&transport, &dialogs).handle_click(Some(LEAD_ID), &link));

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(link.detached.get(), 1);
    assert_eq!(
        transport.requests(),
        vec![RecordedRequest { url: format!("/dashboard/deletar_lead/{LEAD_ID}"), body: None }]
    );
    assert!(dialogs.alerts().is_empty());
}

#[test]
fn non_success_status_keeps_link_and_alerts() {
    for status in [400, 401, 404, 500] {
        let (transport, dialogs, link) =
            (FakeTransport::replying(status), FakeDialogs::accepting(), FakeElement::default());

        let outcome = block_on(control(&transport, &dialogs).handle_click(Some(LEAD_ID), &link));

        assert_eq!(outcome, DeleteOutcome::Rejected(status));
        assert_eq!(link.detached.get(), 0);
        assert_eq!(dialogs.alerts(), vec![ERROR_MESSAGE.to_owned()]);
    }
}

#[test]
fn transport_failure_is_logged_not_alerted() {
    let (transport, dialogs, link) =
        (FakeTransport::failing("connection reset"), FakeDialogs::accepting(), FakeElement::default());

    let outcome = block_on(control(&transport, &dialogs).handle_click(Some(LEAD_ID), &link));

    assert_eq!(outcome, DeleteOutcome::Failed(TransportError::Network("connection reset".into())));
    assert_eq!(link.detached.get(), 0);
    assert!(dialogs.alerts().is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn missing_or_blank_id_sends_nothing() {
    for id in [None, Some(""), Some("   ")] {
        let (transport, dialogs, link) =
            (FakeTransport::replying(204), FakeDialogs::accepting(), FakeElement::default());

        let outcome = block_on(control(&transport, &dialogs).handle_click(id, &link));

        assert_eq!(outcome, DeleteOutcome::MissingId);
        assert!(transport.requests().is_empty());
        assert_eq!(link.detached.get(), 0);
    }
}

#[test]
fn painel_endpoint_routes_to_painel_path() {
    let (transport, dialogs, link) = (FakeTransport::replying(200), FakeDialogs::accepting(), FakeElement::default());
    let control = LeadDeleteControl::new(DeleteEndpoint::painel(), &transport, &dialogs);

    block_on(control.handle_click(Some("42"), &link));

    assert_eq!(transport.requests()[0].url, "/painel/deletar_lead/42");
}
