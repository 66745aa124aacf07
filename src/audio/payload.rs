use crate::error::PipelineError;
use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use tracing::info;

/// Supported audio media encodings.
///
/// The set is closed: a payload can only be constructed with one of these,
/// so an unsupported encoding is rejected wherever the declared encoding is
/// parsed (file extension, HTTP Content-Type) before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioEncoding {
    Wav,
    Mp3,
    M4a,
}

impl AudioEncoding {
    /// All supported encodings, in upload-form order.
    pub const ALL: [AudioEncoding; 3] = [AudioEncoding::Wav, AudioEncoding::Mp3, AudioEncoding::M4a];

    /// Wire content type sent to the speech-recognition provider.
    pub fn content_type(&self) -> &'static str {
        match self {
            AudioEncoding::Wav => "audio/wav",
            AudioEncoding::Mp3 => "audio/mpeg",
            AudioEncoding::M4a => "audio/mp4",
        }
    }

    /// Canonical file extension (lowercase, without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            AudioEncoding::Wav => "wav",
            AudioEncoding::Mp3 => "mp3",
            AudioEncoding::M4a => "m4a",
        }
    }

    /// Parse from a file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "wav" => Some(AudioEncoding::Wav),
            "mp3" => Some(AudioEncoding::Mp3),
            "m4a" => Some(AudioEncoding::M4a),
            _ => None,
        }
    }

    /// Parse from an HTTP Content-Type value, ignoring any parameters
    /// (e.g. `audio/wav; charset=binary`). Common aliases are accepted.
    pub fn from_content_type(value: &str) -> Option<Self> {
        let media_type = value.split(';').next().unwrap_or("").trim();
        match media_type.to_ascii_lowercase().as_str() {
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(AudioEncoding::Wav),
            "audio/mpeg" | "audio/mp3" => Some(AudioEncoding::Mp3),
            "audio/mp4" | "audio/m4a" | "audio/x-m4a" => Some(AudioEncoding::M4a),
            _ => None,
        }
    }
}

impl fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// An immutable audio recording plus its asserted encoding.
///
/// The bytes are opaque to the pipeline; they are forwarded to the
/// speech-recognition provider unmodified.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    bytes: Vec<u8>,
    encoding: AudioEncoding,
}

impl AudioPayload {
    pub fn new(bytes: Vec<u8>, encoding: AudioEncoding) -> Self {
        Self { bytes, encoding }
    }

    /// Read a payload from a local file, inferring the encoding from the
    /// file extension. Used by the CLI shell.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let encoding = AudioEncoding::from_extension(ext).with_context(|| {
            format!(
                "Unsupported audio file extension {:?} (supported: wav, mp3, m4a)",
                ext
            )
        })?;

        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read audio file: {}", path.display()))?;

        info!(
            "Loaded audio file: {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            encoding
        );

        Ok(Self { bytes, encoding })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn encoding(&self) -> AudioEncoding {
        self.encoding
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check the payload invariants. Called by the pipeline before any
    /// network activity.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.bytes.is_empty() {
            return Err(PipelineError::Validation {
                reason: "audio payload is empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_content_types() {
        assert_eq!(AudioEncoding::Wav.content_type(), "audio/wav");
        assert_eq!(AudioEncoding::Mp3.content_type(), "audio/mpeg");
        assert_eq!(AudioEncoding::M4a.content_type(), "audio/mp4");
    }

    #[test]
    fn test_encoding_from_extension() {
        assert_eq!(AudioEncoding::from_extension("wav"), Some(AudioEncoding::Wav));
        assert_eq!(AudioEncoding::from_extension("WAV"), Some(AudioEncoding::Wav));
        assert_eq!(AudioEncoding::from_extension("m4a"), Some(AudioEncoding::M4a));
        assert_eq!(AudioEncoding::from_extension("flac"), None);
        assert_eq!(AudioEncoding::from_extension(""), None);
    }

    #[test]
    fn test_encoding_from_content_type() {
        assert_eq!(
            AudioEncoding::from_content_type("audio/wav"),
            Some(AudioEncoding::Wav)
        );
        assert_eq!(
            AudioEncoding::from_content_type("audio/wav; charset=binary"),
            Some(AudioEncoding::Wav)
        );
        assert_eq!(
            AudioEncoding::from_content_type("audio/mp3"),
            Some(AudioEncoding::Mp3)
        );
        assert_eq!(
            AudioEncoding::from_content_type("audio/x-m4a"),
            Some(AudioEncoding::M4a)
        );
        assert_eq!(AudioEncoding::from_content_type("application/json"), None);
        assert_eq!(AudioEncoding::from_content_type(""), None);
    }

    #[test]
    fn test_empty_payload_fails_validation() {
        let payload = AudioPayload::new(Vec::new(), AudioEncoding::Wav);
        let result = payload.validate();

        assert!(result.is_err());
        match result {
            Err(PipelineError::Validation { reason }) => {
                assert!(reason.contains("empty"));
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_non_empty_payload_passes_validation() {
        let payload = AudioPayload::new(vec![0u8; 128], AudioEncoding::Mp3);
        assert!(payload.validate().is_ok());
        assert_eq!(payload.len(), 128);
        assert_eq!(payload.encoding(), AudioEncoding::Mp3);
    }
}
