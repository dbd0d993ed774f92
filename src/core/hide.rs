//! Hide operation: embed the payload and download the modified carrier.

use tracing::{debug, info, warn};

use super::client::{HideRequest, StegoClient, Transport};
use super::platform::Platform;
use super::selection::Side;
use super::session::{Operation, PendingRequest, SessionCell};
use crate::config::messages;
use crate::models::OperationOutcome;

/// Submit the hide form.
///
/// Preconditions (a selected file and a non-empty payload) are checked
/// before anything is sent; a violation yields a failure with no request. On
/// success the carrier is offered as `hidden_data.<ext>`, a success
/// notification is shown and the form is reset. The in-flight token is
/// released on every path.
pub async fn execute<S, T, P>(
    session: &S,
    client: &StegoClient<T>,
    platform: &P,
) -> OperationOutcome<Vec<u8>>
where
    S: SessionCell<File = T::File>,
    T: Transport,
    P: Platform,
{
    let prepared = session.update(|s| {
        let form = s.hide();
        match form.selection.file() {
            Some(file) if !form.payload.is_empty() => {
                let request = HideRequest::new(file.clone(), form.payload.clone(), &form.password);
                let kind = form.selection.kind();
                Ok((request, kind, s.in_flight.start(Operation::Hide)))
            }
            _ => {
                s.notice.error(messages::HIDE_PRECONDITION, platform.now_ms());
                Err(messages::HIDE_PRECONDITION.to_string())
            }
        }
    });
    let (request, kind, token) = match prepared {
        Ok(prepared) => prepared,
        Err(message) => return OperationOutcome::Failure(message),
    };
    let pending = PendingRequest::new(session, Operation::Hide, token);

    debug!(%kind, with_password = request.password.is_some(), "submitting hide request");
    let result = client.hide(kind, request).await;

    let (outcome, reset_input) = pending.settle(|s, current| {
        if !current {
            debug!(%kind, "discarding superseded hide result");
            return (OperationOutcome::Superseded, false);
        }
        let bytes = match result {
            Ok(bytes) => bytes,
            Err(err) => {
                let message = err.user_message(messages::HIDE_FALLBACK);
                warn!(%kind, error = %err, "hide request failed");
                s.notice.error(
                    format!("{}{}", messages::ERROR_PREFIX, message),
                    platform.now_ms(),
                );
                return (OperationOutcome::Failure(message), false);
            }
        };
        let delivered = platform.trigger_download(&bytes, &kind.download_name(), kind.mime_type());
        if let Err(err) = delivered {
            let message = err.to_string();
            warn!(%kind, error = %err, "could not deliver hide result");
            s.notice.error(
                format!("{}{}", messages::ERROR_PREFIX, message),
                platform.now_ms(),
            );
            return (OperationOutcome::Failure(message), false);
        }
        info!(%kind, size = bytes.len(), "payload hidden");
        s.notice.success(messages::HIDE_SUCCESS, platform.now_ms());
        s.reset_hide_form();
        (OperationOutcome::Success(bytes), true)
    });
    if reset_input {
        platform.reset_file_input(Side::Hide);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::error::ServiceError;
    use crate::core::selection::select;
    use crate::core::session::Session;
    use crate::core::testing::{MockPlatform, MockTransport, TestFile};
    use crate::models::{CapacityEstimate, MediaKind, Severity};

    fn setup() -> (Rc<RefCell<Session<TestFile>>>, MockTransport, MockPlatform) {
        (
            Rc::new(RefCell::new(Session::new())),
            MockTransport::default(),
            MockPlatform::default(),
        )
    }

    #[tokio::test]
    async fn test_missing_file_fails_without_request() {
        let (session, transport, platform) = setup();
        session.borrow_mut().set_payload("secret");
        let client = StegoClient::new(transport.clone(), "");

        let outcome = execute(&*session, &client, &platform).await;

        assert_eq!(
            outcome,
            OperationOutcome::Failure(messages::HIDE_PRECONDITION.to_string())
        );
        assert!(transport.requests().is_empty());
        let s = session.borrow();
        assert_eq!(s.notice.current().unwrap().severity, Severity::Error);
        assert!(!s.hide_busy());
    }

    #[tokio::test]
    async fn test_empty_payload_fails_without_request() {
        let (session, transport, platform) = setup();
        select(&*session, Side::Hide, TestFile::new("photo.png"));
        let client = StegoClient::new(transport.clone(), "");

        let outcome = execute(&*session, &client, &platform).await;

        assert_eq!(outcome.failure(), Some(messages::HIDE_PRECONDITION));
        assert!(transport.requests().is_empty());
        assert!(session.borrow().hide().selection.has_file());
    }

    #[tokio::test]
    async fn test_image_without_password_downloads_png() {
        let (session, transport, platform) = setup();
        select(&*session, Side::Hide, TestFile::new("photo.png"));
        session.borrow_mut().set_payload("secret");
        transport.respond(200, b"\x89PNG...");
        let client = StegoClient::new(transport.clone(), "http://localhost:5000");

        let outcome = execute(&*session, &client, &platform).await;

        assert_eq!(outcome, OperationOutcome::Success(b"\x89PNG...".to_vec()));
        let request = &transport.requests()[0];
        assert_eq!(request.url, "http://localhost:5000/api/hide/image");
        assert_eq!(request.fields, vec!["file", "data"]);
        assert_eq!(request.texts, vec![("data", "secret".to_string())]);

        let downloads = platform.downloads();
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].1, "hidden_data.png");
        assert_eq!(downloads[0].2, "image/png");

        let s = session.borrow();
        let notice = s.notice.current().unwrap();
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.text, messages::HIDE_SUCCESS);

        assert!(!s.hide().selection.has_file());
        assert_eq!(s.hide().payload, "");
        assert_eq!(s.hide().password, "");
        assert!(!s.hide_busy());
        assert_eq!(platform.reset_inputs(), vec![Side::Hide]);
    }

    #[tokio::test]
    async fn test_success_resets_form_with_password() {
        let (session, transport, platform) = setup();
        {
            let mut s = session.borrow_mut();
            s.set_hide_kind(MediaKind::Pdf);
            s.set_payload("secret");
            s.set_hide_password("hunter2");
        }
        select(&*session, Side::Hide, TestFile::new("doc.pdf"));
        session
            .borrow_mut()
            .hide_mut()
            .set_capacity(CapacityEstimate::new(800));
        transport.respond(200, b"%PDF-1.7");
        let client = StegoClient::new(transport.clone(), "");

        let outcome = execute(&*session, &client, &platform).await;

        assert!(outcome.is_success());
        assert_eq!(transport.requests()[0].fields, vec!["file", "data", "password"]);
        assert_eq!(platform.downloads()[0].1, "hidden_data.pdf");
        let s = session.borrow();
        assert!(!s.hide().selection.has_file());
        assert_eq!(s.hide().payload, "");
        assert_eq!(s.hide().password, "");
        assert!(s.hide().capacity().is_none());
        assert!(!s.hide_busy());
        assert_eq!(platform.reset_inputs(), vec![Side::Hide]);
    }

    #[tokio::test]
    async fn test_rejection_keeps_form() {
        let (session, transport, platform) = setup();
        select(&*session, Side::Hide, TestFile::new("song.wav"));
        {
            let mut s = session.borrow_mut();
            s.set_hide_kind(MediaKind::Audio);
            s.set_payload("too long for this carrier");
        }
        transport.respond(500, br#"{"error":"Data too large"}"#);
        let client = StegoClient::new(transport, "");

        let outcome = execute(&*session, &client, &platform).await;

        assert_eq!(outcome, OperationOutcome::Failure("Data too large".to_string()));
        assert!(platform.downloads().is_empty());
        let s = session.borrow();
        assert_eq!(s.notice.text(), "Error: Data too large");
        assert!(s.hide().selection.has_file());
        assert_eq!(s.hide().payload, "too long for this carrier");
        assert!(!s.hide_busy());
    }

    #[tokio::test]
    async fn test_network_failure_releases_busy() {
        let (session, transport, platform) = setup();
        select(&*session, Side::Hide, TestFile::new("photo.png"));
        session.borrow_mut().set_payload("secret");
        transport.fail(ServiceError::Network("Failed to fetch".to_string()));
        let during = Rc::clone(&session);
        transport.on_send(move || assert!(during.borrow().hide_busy()));
        let client = StegoClient::new(transport, "");

        let outcome = execute(&*session, &client, &platform).await;

        assert_eq!(outcome.failure(), Some("Network error: Failed to fetch"));
        assert!(!session.borrow().hide_busy());
    }

    #[tokio::test]
    async fn test_download_failure_is_reported() {
        let (session, transport, platform) = setup();
        select(&*session, Side::Hide, TestFile::new("photo.png"));
        session.borrow_mut().set_payload("secret");
        transport.respond(200, b"png");
        platform.download_ok.set(false);
        let client = StegoClient::new(transport, "");

        let outcome = execute(&*session, &client, &platform).await;

        assert!(outcome.failure().is_some());
        let s = session.borrow();
        assert!(s.notice.current().unwrap().is_error());
        assert!(s.hide().selection.has_file());
        assert!(platform.reset_inputs().is_empty());
    }
}
