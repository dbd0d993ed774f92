//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`MediaKind`] - Carrier categories and their naming rules
//! - [`Notification`], [`Severity`] - User-facing messages
//! - [`CapacityEstimate`], [`OperationOutcome`] - Operation results
//! - [`SupportedFormats`] - Extensions the service accepts per kind
//! - [`Tab`] - Active panel

mod formats;
mod media;
mod notification;
mod outcome;
mod view;

pub use formats::SupportedFormats;
pub use media::MediaKind;
pub use notification::{NoticeId, Notification, Severity};
pub use outcome::{CapacityEstimate, OperationOutcome};
pub use view::Tab;
