//! Browser-side utilities.
//!
//! Provides:
//! - [`dom`] - Safe access to window, document and inputs
//! - [`GlooTransport`] - Fetch-backed [`Transport`](crate::core::Transport)
//! - [`BrowserPlatform`] - Downloads, clipboard and input resets
//! - [`logging`] - `tracing` subscriber writing to the console

mod browser;
pub mod dom;
mod http;
pub mod logging;

pub use browser::BrowserPlatform;
pub use http::GlooTransport;
