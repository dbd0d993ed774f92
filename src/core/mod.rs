//! Core orchestration logic, independent of the DOM.
//!
//! This module provides:
//! - [`Session`] typed client state reached through a [`SessionCell`]
//! - [`capacity::negotiate`], [`hide::execute`], [`extract::execute`] operation flows
//! - [`StegoClient`] the service's HTTP contract over a [`Transport`]
//! - [`Platform`] the seam for downloads, clipboard and input resets

pub mod capacity;
mod client;
pub mod clipboard;
pub mod error;
pub mod extract;
pub mod hide;
mod locator;
mod notify;
mod platform;
pub mod selection;
mod session;
pub mod startup;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{FormPart, HttpReply, MultipartForm, StegoClient, Transport};
pub use locator::ServiceLocator;
pub use platform::Platform;
pub use selection::{Carrier, Side};
pub use session::{Session, SessionCell};
