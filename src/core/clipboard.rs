//! Copy recovered text to the system clipboard.

use tracing::{debug, warn};

use super::platform::Platform;
use super::session::SessionCell;
use crate::config::messages;

/// Copy `text`, falling back to the legacy copy command if the clipboard API
/// fails. Returns whether either path succeeded; a failure of both is
/// reported to the user instead of being masked as success. Empty text is
/// never written; the user is told there is nothing to copy.
pub async fn copy<S, P>(session: &S, platform: &P, text: &str) -> bool
where
    S: SessionCell,
    P: Platform,
{
    if text.is_empty() {
        let now = platform.now_ms();
        session.update(|s| {
            s.notice.info(messages::NOTHING_TO_COPY, now);
        });
        return false;
    }

    let copied = match platform.write_clipboard(text).await {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "clipboard API failed, using fallback");
            match platform.write_clipboard_fallback(text) {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = %err, "clipboard fallback failed");
                    false
                }
            }
        }
    };

    let now = platform.now_ms();
    session.update(|s| {
        if copied {
            s.notice.success(messages::COPY_SUCCESS, now);
        } else {
            s.notice.error(messages::COPY_FAILURE, now);
        }
    });
    copied
}
