//! Carrier file selection.
//!
//! Each side of the workflow (hide, extract) owns an independent
//! [`FileSelection`]; clearing one never touches the other. Manual picking
//! and drag-and-drop both end in [`select`], so the two paths share a single
//! state transition.

use tracing::debug;

use super::platform::Platform;
use super::session::SessionCell;
use crate::models::MediaKind;

/// Opaque handle to a user-chosen file.
pub trait Carrier: Clone + 'static {
    /// File name as reported by the host, used for the multipart upload.
    fn name(&self) -> String;
}

/// Which side of the workflow a selection belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Hide,
    Extract,
}

/// Currently chosen carrier file and its declared media kind.
#[derive(Clone, Debug)]
pub struct FileSelection<F> {
    file: Option<F>,
    kind: MediaKind,
}

impl<F: Carrier> FileSelection<F> {
    pub fn new(kind: MediaKind) -> Self {
        Self { file: None, kind }
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.as_ref().map(Carrier::name)
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub(crate) fn select(&mut self, file: F) {
        self.file = Some(file);
    }

    pub(crate) fn clear(&mut self) {
        self.file = None;
    }

    /// Returns `true` if the kind actually changed.
    pub(crate) fn set_kind(&mut self, kind: MediaKind) -> bool {
        let changed = self.kind != kind;
        self.kind = kind;
        changed
    }
}

impl<F: Carrier> Default for FileSelection<F> {
    fn default() -> Self {
        Self::new(MediaKind::default())
    }
}

/// Static description of the carrier files accepted for `kind`.
pub fn describe_media_kind(kind: MediaKind) -> &'static str {
    kind.description()
}

/// Whether a drop carrying `file_count` files should be forwarded to the
/// input as a selection.
pub fn accepts_drop(file_count: u32) -> bool {
    file_count > 0
}

/// Replace the selection on `side`.
///
/// On the hide side this drops any capacity estimate and abandons a capacity
/// negotiation that is still running for the previous file.
pub fn select<S: SessionCell>(session: &S, side: Side, file: S::File) {
    debug!(?side, name = %file.name(), "file selected");
    session.update(|s| match side {
        Side::Hide => s.select_hide_file(file),
        Side::Extract => s.select_extract_file(file),
    });
}

/// Clear the selection on `side` and reset its native input control.
pub fn clear<S, P>(session: &S, platform: &P, side: Side)
where
    S: SessionCell,
    P: Platform,
{
    session.update(|s| match side {
        Side::Hide => s.clear_hide_file(),
        Side::Extract => s.clear_extract_file(),
    });
    platform.reset_file_input(side);
}
