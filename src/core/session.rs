//! Typed application session state.
//!
//! [`Session`] owns both forms, the notification slot and the in-flight
//! request tokens. Every mutation goes through a named method; callers reach
//! the session through a [`SessionCell`], which is a `RefCell` in tests and a
//! Leptos signal in the browser.

use std::cell::RefCell;

use super::notify::NotificationCenter;
use super::selection::{Carrier, FileSelection};
use crate::models::{CapacityEstimate, MediaKind};

// ============================================================================
// In-flight request tracking
// ============================================================================

/// Request families that can be in flight independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Capacity,
    Hide,
    Extract,
}

/// Identifies one submitted request within its family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Active request per family.
///
/// Starting a request replaces the family's active token; a completion only
/// applies its result if its token is still the active one.
#[derive(Clone, Debug, Default)]
pub struct InFlight {
    next: u64,
    capacity: Option<RequestToken>,
    hide: Option<RequestToken>,
    extract: Option<RequestToken>,
}

impl InFlight {
    fn slot(&mut self, op: Operation) -> &mut Option<RequestToken> {
        match op {
            Operation::Capacity => &mut self.capacity,
            Operation::Hide => &mut self.hide,
            Operation::Extract => &mut self.extract,
        }
    }

    pub fn start(&mut self, op: Operation) -> RequestToken {
        self.next += 1;
        let token = RequestToken(self.next);
        *self.slot(op) = Some(token);
        token
    }

    /// Release `token`. Returns `true` if it was still the active request.
    pub fn finish(&mut self, op: Operation, token: RequestToken) -> bool {
        let slot = self.slot(op);
        if *slot == Some(token) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Abandon whatever request of `op` is active; its completion will be ignored.
    pub fn cancel(&mut self, op: Operation) {
        *self.slot(op) = None;
    }

    pub fn is_active(&self, op: Operation) -> bool {
        match op {
            Operation::Capacity => self.capacity.is_some(),
            Operation::Hide => self.hide.is_some(),
            Operation::Extract => self.extract.is_some(),
        }
    }
}

// ============================================================================
// Forms
// ============================================================================

/// Hide-side form: carrier, payload, password and advisory capacity.
#[derive(Clone, Debug)]
pub struct HideForm<F> {
    pub selection: FileSelection<F>,
    pub payload: String,
    pub password: String,
    pub show_password: bool,
    capacity: Option<CapacityEstimate>,
}

impl<F: Carrier> HideForm<F> {
    fn new() -> Self {
        Self {
            selection: FileSelection::default(),
            payload: String::new(),
            password: String::new(),
            show_password: false,
            capacity: None,
        }
    }

    /// Capacity of the selected file, if negotiated since it was chosen.
    pub fn capacity(&self) -> Option<CapacityEstimate> {
        self.capacity
    }

    /// Advisory: whether the payload fits the negotiated capacity.
    /// `None` when no capacity is known.
    pub fn payload_fits(&self) -> Option<bool> {
        self.capacity.map(|c| c.fits(&self.payload))
    }

    /// Ignored when no file is selected.
    pub(crate) fn set_capacity(&mut self, capacity: CapacityEstimate) {
        if self.selection.has_file() {
            self.capacity = Some(capacity);
        }
    }

    fn reset(&mut self) {
        self.selection.clear();
        self.capacity = None;
        self.payload.clear();
        self.password.clear();
    }
}

/// Extract-side form: carrier, password and the last recovered text.
#[derive(Clone, Debug)]
pub struct ExtractForm<F> {
    pub selection: FileSelection<F>,
    pub password: String,
    pub show_password: bool,
    extracted: String,
}

impl<F: Carrier> ExtractForm<F> {
    fn new() -> Self {
        Self {
            selection: FileSelection::default(),
            password: String::new(),
            show_password: false,
            extracted: String::new(),
        }
    }

    /// Text recovered by the last successful extraction.
    pub fn extracted(&self) -> &str {
        &self.extracted
    }
}

// ============================================================================
// Session
// ============================================================================

/// Whole client state for one page session.
#[derive(Clone, Debug)]
pub struct Session<F> {
    hide: HideForm<F>,
    extract: ExtractForm<F>,
    pub notice: NotificationCenter,
    pub(crate) in_flight: InFlight,
}

impl<F: Carrier> Session<F> {
    pub fn new() -> Self {
        Self {
            hide: HideForm::new(),
            extract: ExtractForm::new(),
            notice: NotificationCenter::new(),
            in_flight: InFlight::default(),
        }
    }

    pub fn hide(&self) -> &HideForm<F> {
        &self.hide
    }

    pub fn extract(&self) -> &ExtractForm<F> {
        &self.extract
    }

    #[cfg(test)]
    pub(crate) fn hide_mut(&mut self) -> &mut HideForm<F> {
        &mut self.hide
    }

    // --- busy state ---

    /// A capacity negotiation or hide request is running.
    pub fn hide_busy(&self) -> bool {
        self.in_flight.is_active(Operation::Capacity) || self.in_flight.is_active(Operation::Hide)
    }

    /// An extract request is running.
    pub fn extract_busy(&self) -> bool {
        self.in_flight.is_active(Operation::Extract)
    }

    pub fn is_busy(&self) -> bool {
        self.hide_busy() || self.extract_busy()
    }

    // --- hide side ---

    pub(crate) fn select_hide_file(&mut self, file: F) {
        self.hide.selection.select(file);
        self.invalidate_capacity();
    }

    pub(crate) fn clear_hide_file(&mut self) {
        self.hide.selection.clear();
        self.invalidate_capacity();
    }

    /// Change the hide-side kind; capacity is per kind, so it is invalidated.
    pub fn set_hide_kind(&mut self, kind: MediaKind) {
        if self.hide.selection.set_kind(kind) {
            self.invalidate_capacity();
        }
    }

    pub fn set_payload(&mut self, payload: impl Into<String>) {
        self.hide.payload = payload.into();
    }

    pub fn set_hide_password(&mut self, password: impl Into<String>) {
        self.hide.password = password.into();
    }

    pub fn toggle_hide_password_visibility(&mut self) {
        self.hide.show_password = !self.hide.show_password;
    }

    pub(crate) fn reset_hide_form(&mut self) {
        self.hide.reset();
        self.in_flight.cancel(Operation::Capacity);
    }

    pub(crate) fn apply_capacity(&mut self, capacity: CapacityEstimate) {
        self.hide.set_capacity(capacity);
    }

    fn invalidate_capacity(&mut self) {
        self.hide.capacity = None;
        self.in_flight.cancel(Operation::Capacity);
    }

    // --- extract side ---

    pub(crate) fn select_extract_file(&mut self, file: F) {
        self.extract.selection.select(file);
    }

    pub(crate) fn clear_extract_file(&mut self) {
        self.extract.selection.clear();
    }

    pub fn set_extract_kind(&mut self, kind: MediaKind) {
        self.extract.selection.set_kind(kind);
    }

    pub fn set_extract_password(&mut self, password: impl Into<String>) {
        self.extract.password = password.into();
    }

    pub fn toggle_extract_password_visibility(&mut self) {
        self.extract.show_password = !self.extract.show_password;
    }

    pub(crate) fn set_extracted(&mut self, text: String) {
        self.extract.extracted = text;
    }

    pub(crate) fn clear_extracted(&mut self) {
        self.extract.extracted.clear();
    }
}

impl<F: Carrier> Default for Session<F> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SessionCell
// ============================================================================

/// Shared, interior-mutable access to a [`Session`].
///
/// `update` must never be held across an `.await`; orchestration code takes
/// the state it needs, releases it, awaits, then re-enters.
pub trait SessionCell {
    type File: Carrier;

    fn update<R>(&self, f: impl FnOnce(&mut Session<Self::File>) -> R) -> R;
}

impl<F: Carrier> SessionCell for RefCell<Session<F>> {
    type File = F;

    fn update<R>(&self, f: impl FnOnce(&mut Session<F>) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Releases an in-flight token when dropped, so an abandoned future can't
/// leave its family marked busy.
pub(crate) struct PendingRequest<'a, S: SessionCell> {
    session: &'a S,
    op: Operation,
    token: RequestToken,
    settled: bool,
}

impl<'a, S: SessionCell> PendingRequest<'a, S> {
    pub(crate) fn new(session: &'a S, op: Operation, token: RequestToken) -> Self {
        Self {
            session,
            op,
            token,
            settled: false,
        }
    }

    /// Release the token and run `f` with whether the request was still current.
    pub(crate) fn settle<R>(mut self, f: impl FnOnce(&mut Session<S::File>, bool) -> R) -> R {
        self.settled = true;
        let (op, token) = (self.op, self.token);
        self.session.update(|s| {
            let current = s.in_flight.finish(op, token);
            f(s, current)
        })
    }
}

impl<S: SessionCell> Drop for PendingRequest<'_, S> {
    fn drop(&mut self) {
        if !self.settled {
            let (op, token) = (self.op, self.token);
            self.session.update(|s| {
                s.in_flight.finish(op, token);
            });
        }
    }
}
