//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The deployed service address can be overridden at build time through the
//! `STEGWEB_API_BASE` environment variable.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "StegApp";

/// Short tagline displayed under the application name.
pub const APP_TAGLINE: &str = "Hide text inside images, audio and PDF files";

// =============================================================================
// Network Configuration
// =============================================================================

/// Hostnames treated as a local development host.
pub const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

/// Service address used when the page is served from a local host.
pub const LOCAL_API_BASE: &str = "http://localhost:5000";

/// Service address used on any other host. Empty means same origin.
pub const DEPLOYED_API_BASE: &str = "";

/// Build-time override for the deployed service address.
pub const API_BASE_OVERRIDE: Option<&str> = option_env!("STEGWEB_API_BASE");

/// REST endpoint paths, relative to the resolved service address.
pub mod endpoints {
    /// Liveness probe.
    pub const HEALTH: &str = "/api/health";
    /// Capacity negotiation, followed by `/{media kind}`.
    pub const CAPACITY: &str = "/api/capacity";
    /// Payload embedding, followed by `/{media kind}`.
    pub const HIDE: &str = "/api/hide";
    /// Payload recovery, followed by `/{media kind}`.
    pub const EXTRACT: &str = "/api/extract";
    /// Accepted file extensions per media kind.
    pub const SUPPORTED_FORMATS: &str = "/api/supported-formats";
}

/// Multipart field names understood by the service.
pub mod form_fields {
    pub const FILE: &str = "file";
    pub const DATA: &str = "data";
    pub const PASSWORD: &str = "password";
}

// =============================================================================
// Notification Configuration
// =============================================================================

/// Lifetime of a notification in milliseconds, measured from `show`.
pub const NOTIFICATION_TTL_MS: u32 = 5000;

// =============================================================================
// Download Configuration
// =============================================================================

/// File stem of a downloaded hide result (`hidden_data.<ext>`).
pub const DOWNLOAD_STEM: &str = "hidden_data";

// =============================================================================
// DOM Configuration
// =============================================================================

/// Element id of the hide-side file input.
pub const HIDE_INPUT_ID: &str = "file-upload";

/// Element id of the extract-side file input.
pub const EXTRACT_INPUT_ID: &str = "extract-file-upload";

/// Root element the application mounts into.
pub const MOUNT_ID: &str = "app";

// =============================================================================
// User Messages
// =============================================================================

/// User-facing notification texts.
pub mod messages {
    pub const HIDE_PRECONDITION: &str = "Please select a file and enter data to hide.";
    pub const EXTRACT_PRECONDITION: &str = "Please select a file.";

    pub const HIDE_SUCCESS: &str =
        "Data hidden successfully! The modified file has been downloaded.";
    pub const EXTRACT_SUCCESS: &str = "Data extracted successfully!";
    pub const COPY_SUCCESS: &str = "Text copied to clipboard!";
    pub const COPY_FAILURE: &str = "Could not copy text to clipboard.";
    pub const NOTHING_TO_COPY: &str = "There is no extracted text to copy yet.";

    pub const API_UNAVAILABLE: &str =
        "Error: API unavailable. Make sure the backend server is running.";

    /// Fallbacks used when the service rejects a request without a readable error.
    pub const CAPACITY_FALLBACK: &str = "Error while checking capacity";
    pub const HIDE_FALLBACK: &str = "Error while hiding data";
    pub const EXTRACT_FALLBACK: &str = "Error while extracting data";

    /// Prefix for service and transport failures.
    pub const ERROR_PREFIX: &str = "Error: ";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
