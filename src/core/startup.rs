//! Startup checks against the service.

use tracing::{info, warn};

use super::client::{StegoClient, Transport};
use super::platform::Platform;
use super::session::SessionCell;
use crate::config::messages;
use crate::models::SupportedFormats;

/// Probe `/api/health`. An unreachable or unhealthy service is reported once
/// as an error notification; nothing else is blocked by it.
pub async fn probe_health<S, T, P>(session: &S, client: &StegoClient<T>, platform: &P) -> bool
where
    S: SessionCell,
    T: Transport,
    P: Platform,
{
    match client.health().await {
        Ok(()) => {
            info!(base = client.base(), "service reachable");
            true
        }
        Err(err) => {
            warn!(base = client.base(), error = %err, "service unavailable");
            let now = platform.now_ms();
            session.update(|s| {
                s.notice.error(messages::API_UNAVAILABLE, now);
            });
            false
        }
    }
}

/// Accepted extensions per kind, or the built-in defaults if the service
/// doesn't answer.
pub async fn load_supported_formats<T: Transport>(client: &StegoClient<T>) -> SupportedFormats {
    client.supported_formats().await.unwrap_or_else(|err| {
        warn!(error = %err, "supported formats unavailable, using defaults");
        SupportedFormats::default()
    })
}
