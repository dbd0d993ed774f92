//! UI components built with Leptos.
//!
//! - [`header`] - Title and tab switcher
//! - [`hide`] - Hide-data panel
//! - [`extract`] - Extract-data panel
//! - [`form`] - Controls shared by both panels
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`toast`] - Notification banner

pub mod extract;
pub mod form;
pub mod header;
pub mod hide;
pub mod icons;
pub mod toast;

pub use extract::ExtractPanel;
pub use header::Header;
pub use hide::HidePanel;
pub use toast::Toast;
