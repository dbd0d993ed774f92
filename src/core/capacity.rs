//! Advisory capacity negotiation for the hide-side carrier.

use tracing::{debug, warn};

use super::client::{StegoClient, Transport};
use super::platform::Platform;
use super::session::{Operation, PendingRequest, SessionCell};
use crate::config::messages;
use crate::models::{CapacityEstimate, OperationOutcome};

/// Ask the service how many payload bits the selected hide-side file holds.
///
/// Returns `None` without touching the network when no file is selected. A
/// reply that arrives after the file (or kind) changed is discarded as
/// [`OperationOutcome::Superseded`]. Never retried.
pub async fn negotiate<S, T, P>(
    session: &S,
    client: &StegoClient<T>,
    platform: &P,
) -> Option<OperationOutcome<CapacityEstimate>>
where
    S: SessionCell<File = T::File>,
    T: Transport,
    P: Platform,
{
    let (file, kind, token) = session.update(|s| {
        let selection = &s.hide().selection;
        let file = selection.file()?.clone();
        let kind = selection.kind();
        Some((file, kind, s.in_flight.start(Operation::Capacity)))
    })?;
    let pending = PendingRequest::new(session, Operation::Capacity, token);

    debug!(%kind, "negotiating capacity");
    let result = client.capacity(kind, file).await;

    let outcome = pending.settle(|s, current| {
        if !current {
            debug!(%kind, "discarding capacity for a replaced file");
            return OperationOutcome::Superseded;
        }
        match result {
            Ok(bits) => {
                let estimate = CapacityEstimate::new(bits);
                s.apply_capacity(estimate);
                OperationOutcome::Success(estimate)
            }
            Err(err) => {
                let message = err.user_message(messages::CAPACITY_FALLBACK);
                warn!(%kind, error = %err, "capacity negotiation failed");
                s.notice.error(
                    format!("{}{}", messages::ERROR_PREFIX, message),
                    platform.now_ms(),
                );
                OperationOutcome::Failure(message)
            }
        }
    });
    Some(outcome)
}
