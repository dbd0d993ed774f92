//! Carrier media kinds.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::DOWNLOAD_STEM;

/// Category of carrier file, selecting the service's encoding path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MediaKind {
    #[default]
    Image,
    Audio,
    Pdf,
}

impl MediaKind {
    /// All kinds in display order.
    pub const ALL: [MediaKind; 3] = [MediaKind::Image, MediaKind::Audio, MediaKind::Pdf];

    /// Endpoint path segment (`/api/hide/{segment}`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Pdf => "pdf",
        }
    }

    /// Short label for pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Audio => "Audio",
            Self::Pdf => "PDF",
        }
    }

    /// Human-readable description of the accepted carrier files.
    pub fn description(self) -> &'static str {
        match self {
            Self::Image => "PNG, JPG, JPEG, BMP and TIFF images are supported",
            Self::Audio => "WAV audio files are supported (16-bit PCM)",
            Self::Pdf => "PDF documents are supported",
        }
    }

    /// Extension of the carrier file the service returns after hiding.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Image => "png",
            Self::Audio => "wav",
            Self::Pdf => "pdf",
        }
    }

    /// MIME type of the carrier file the service returns after hiding.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Image => "image/png",
            Self::Audio => "audio/wav",
            Self::Pdf => "application/pdf",
        }
    }

    /// Extensions accepted by the service when it doesn't advertise its own.
    pub fn default_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => &["png", "jpg", "jpeg", "bmp", "tiff"],
            Self::Audio => &["wav"],
            Self::Pdf => &["pdf"],
        }
    }

    /// Name of the downloaded hide result, `hidden_data.<ext>`.
    pub fn download_name(self) -> String {
        format!("{}.{}", DOWNLOAD_STEM, self.extension())
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known media kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown media kind: {0}")]
pub struct UnknownMediaKind(pub String);

impl FromStr for MediaKind {
    type Err = UnknownMediaKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            "pdf" => Ok(Self::Pdf),
            other => Err(UnknownMediaKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments() {
        assert_eq!(MediaKind::Image.as_str(), "image");
        assert_eq!(MediaKind::Audio.as_str(), "audio");
        assert_eq!(MediaKind::Pdf.as_str(), "pdf");
    }

    #[test]
    fn test_parse_roundtrip_of_known_kinds() {
        for kind in MediaKind::ALL {
            assert_eq!(kind.as_str().parse::<MediaKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("video".parse::<MediaKind>().is_err());
        assert!("Image".parse::<MediaKind>().is_err());
        assert!("".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_download_names() {
        assert_eq!(MediaKind::Image.download_name(), "hidden_data.png");
        assert_eq!(MediaKind::Audio.download_name(), "hidden_data.wav");
        assert_eq!(MediaKind::Pdf.download_name(), "hidden_data.pdf");
    }

    #[test]
    fn test_unknown_kind_error_names_the_input() {
        let err = "video".parse::<MediaKind>().unwrap_err();
        assert_eq!(err, UnknownMediaKind("video".to_string()));
        assert_eq!(err.to_string(), "unknown media kind: video");
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let descriptions: Vec<_> = MediaKind::ALL.iter().map(|k| k.description()).collect();
        assert!(descriptions.iter().all(|d| !d.is_empty()));
        assert_ne!(descriptions[0], descriptions[1]);
        assert_ne!(descriptions[1], descriptions[2]);
        assert_ne!(descriptions[0], descriptions[2]);
    }

    #[test]
    fn test_default_is_image() {
        assert_eq!(MediaKind::default(), MediaKind::Image);
    }
}
