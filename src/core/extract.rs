//! Extract operation: recover payload text from a carrier.

use tracing::{debug, info, warn};

use super::client::{ExtractRequest, StegoClient, Transport};
use super::platform::Platform;
use super::session::{Operation, PendingRequest, SessionCell};
use crate::config::messages;
use crate::models::OperationOutcome;

/// Submit the extract form.
///
/// Fails immediately, without a request, when no file is selected. Any
/// failure after submission clears the previously extracted text so a stale
/// result never lingers next to an error.
pub async fn execute<S, T, P>(
    session: &S,
    client: &StegoClient<T>,
    platform: &P,
) -> OperationOutcome<String>
where
    S: SessionCell<File = T::File>,
    T: Transport,
    P: Platform,
{
    let prepared = session.update(|s| {
        let form = s.extract();
        match form.selection.file() {
            Some(file) => {
                let request = ExtractRequest::new(file.clone(), &form.password);
                let kind = form.selection.kind();
                Ok((request, kind, s.in_flight.start(Operation::Extract)))
            }
            None => {
                s.notice.error(messages::EXTRACT_PRECONDITION, platform.now_ms());
                Err(messages::EXTRACT_PRECONDITION.to_string())
            }
        }
    });
    let (request, kind, token) = match prepared {
        Ok(prepared) => prepared,
        Err(message) => return OperationOutcome::Failure(message),
    };
    let pending = PendingRequest::new(session, Operation::Extract, token);

    debug!(%kind, with_password = request.password.is_some(), "submitting extract request");
    let result = client.extract(kind, request).await;

    pending.settle(|s, current| {
        if !current {
            debug!(%kind, "discarding superseded extract result");
            return OperationOutcome::Superseded;
        }
        match result {
            Ok(text) => {
                info!(%kind, chars = text.chars().count(), "payload extracted");
                s.set_extracted(text.clone());
                s.notice.success(messages::EXTRACT_SUCCESS, platform.now_ms());
                OperationOutcome::Success(text)
            }
            Err(err) => {
                let message = err.user_message(messages::EXTRACT_FALLBACK);
                warn!(%kind, error = %err, "extract request failed");
                s.clear_extracted();
                s.notice.error(
                    format!("{}{}", messages::ERROR_PREFIX, message),
                    platform.now_ms(),
                );
                OperationOutcome::Failure(message)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::selection::{Side, select};
    use crate::core::session::Session;
    use crate::core::testing::{MockPlatform, MockTransport, TestFile};
    use crate::models::{MediaKind, Severity};

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
        let client = StegoClient::new(transport.clone(), "");

        let outcome = execute(&*session, &client, &platform).await;

        assert_eq!(
            outcome,
            OperationOutcome::Failure(messages::EXTRACT_PRECONDITION.to_string())
        );
        assert!(transport.requests().is_empty());
        assert_eq!(session.borrow().notice.text(), messages::EXTRACT_PRECONDITION);
    }

    #[tokio::test]
    async fn test_success_stores_text() {
        let (session, transport, platform) = setup();
        session.borrow_mut().set_extract_kind(MediaKind::Audio);
        select(&*session, Side::Extract, TestFile::new("song.wav"));
        session.borrow_mut().set_extract_password("pw");
        transport.respond(200, br#"{"data":"hello world","success":true}"#);
        let client = StegoClient::new(transport.clone(), "");

        let outcome = execute(&*session, &client, &platform).await;

        assert_eq!(outcome, OperationOutcome::Success("hello world".to_string()));
        let request = &transport.requests()[0];
        assert_eq!(request.url, "/api/extract/audio");
        assert_eq!(request.fields, vec!["file", "password"]);
        let s = session.borrow();
        assert_eq!(s.extract().extracted(), "hello world");
        assert_eq!(s.notice.current().unwrap().severity, Severity::Success);
        assert!(!s.extract_busy());
        // Extraction leaves the selection in place.
        assert!(s.extract().selection.has_file());
    }

    #[tokio::test]
    async fn test_bad_password_clears_previous_text() {
        let (session, transport, platform) = setup();
        select(&*session, Side::Extract, TestFile::new("stego.png"));
        transport.respond(200, br#"{"data":"old secret"}"#);
        transport.respond(400, br#"{"error":"bad password"}"#);
        let client = StegoClient::new(transport.clone(), "");

        execute(&*session, &client, &platform).await;
        assert_eq!(session.borrow().extract().extracted(), "old secret");

        let during = Rc::clone(&session);
        transport.on_send(move || assert!(during.borrow().extract_busy()));
        let outcome = execute(&*session, &client, &platform).await;

        assert_eq!(outcome, OperationOutcome::Failure("bad password".to_string()));
        let s = session.borrow();
        assert_eq!(s.extract().extracted(), "");
        assert_eq!(s.notice.text(), "Error: bad password");
        assert!(!s.extract_busy());
        assert!(!s.is_busy());
    }

    #[tokio::test]
    async fn test_unparseable_rejection_uses_fallback_and_clears() {
        let (session, transport, platform) = setup();
        select(&*session, Side::Extract, TestFile::new("stego.png"));
        session.borrow_mut().set_extracted("stale".to_string());
        transport.respond(500, b"oops");
        let client = StegoClient::new(transport, "");

        let outcome = execute(&*session, &client, &platform).await;

        assert_eq!(outcome.failure(), Some(messages::EXTRACT_FALLBACK));
        assert_eq!(session.borrow().extract().extracted(), "");
    }

    #[tokio::test]
    async fn test_superseded_result_is_not_applied() {
        let (session, transport, platform) = setup();
        select(&*session, Side::Extract, TestFile::new("stego.png"));
        session.borrow_mut().set_extracted("kept".to_string());
        transport.respond(400, br#"{"error":"bad password"}"#);
        let during = Rc::clone(&session);
        transport.on_send(move || {
            // A second submission takes over while the first is on the wire.
            during.borrow_mut().in_flight.start(Operation::Extract);
        });
        let client = StegoClient::new(transport, "");

        let outcome = execute(&*session, &client, &platform).await;

        assert_eq!(outcome, OperationOutcome::Superseded);
        let s = session.borrow();
        assert_eq!(s.extract().extracted(), "kept");
        assert!(s.notice.current().is_none());
        assert!(s.extract_busy());
    }
}
