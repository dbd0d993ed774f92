//! Accepted carrier file extensions.

use serde::Deserialize;

use super::MediaKind;

/// Extensions accepted by the service, keyed by media kind.
///
/// Mirrors the `/api/supported-formats` response. Kinds missing from the
/// response fall back to [`MediaKind::default_extensions`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SupportedFormats {
    #[serde(default)]
    image: Vec<String>,
    #[serde(default)]
    audio: Vec<String>,
    #[serde(default)]
    pdf: Vec<String>,
}

impl SupportedFormats {
    /// Extensions (without dot) for a kind.
    pub fn extensions(&self, kind: MediaKind) -> Vec<String> {
        let advertised = match kind {
            MediaKind::Image => &self.image,
            MediaKind::Audio => &self.audio,
            MediaKind::Pdf => &self.pdf,
        };
        if advertised.is_empty() {
            kind.default_extensions()
                .iter()
                .map(|ext| ext.to_string())
                .collect()
        } else {
            advertised.clone()
        }
    }

    /// Value for a file input's `accept` attribute, e.g. `.png,.jpg`.
    pub fn accept_attr(&self, kind: MediaKind) -> String {
        let mut exts = self.extensions(kind);
        exts.sort();
        exts.iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join(",")
    }
}
