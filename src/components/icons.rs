//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::MediaKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBan as Error, LuCheck as Success, LuCopy as Copy, LuEye as Eye, LuEyeOff as EyeOff,
        LuFileText as FilePdf, LuImage as FileImage, LuInfo as Info, LuLock as Lock,
        LuMusic as FileAudio, LuSearch as Search, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckCircle as Success, BsClipboard as Copy, BsCloudArrowUp as Upload,
        BsExclamationTriangle as Error, BsEye as Eye, BsEyeSlash as EyeOff,
        BsFileEarmarkImage as FileImage, BsFileEarmarkMusic as FileAudio,
        BsFileEarmarkPdf as FilePdf, BsInfoCircle as Info, BsLockFill as Lock,
        BsSearch as Search, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(UPLOAD, Upload);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(CLOSE, Close);
themed_icon!(EYE, Eye);
themed_icon!(EYE_OFF, EyeOff);
themed_icon!(COPY, Copy);
themed_icon!(LOCK, Lock);
themed_icon!(SEARCH, Search);
themed_icon!(INFO, Info);
themed_icon!(SUCCESS, Success);
themed_icon!(ERROR, Error);

/// Icon shown next to a media kind.
pub fn media_kind(kind: MediaKind) -> Icon {
    match kind {
        MediaKind::Image => FILE_IMAGE,
        MediaKind::Audio => FILE_AUDIO,
        MediaKind::Pdf => FILE_PDF,
    }
}
