//! Content classification: what kind of subject is this, before any
//! producer looks at it.
//!
//! URLs are classified by structure alone. Files are sniffed by their
//! leading bytes, with the file extension as a fallback.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use url::Url;

use lavs_core::errors::InputError;
use lavs_core::tracing::events;
use lavs_core::types::Classification;

/// Bytes read from the head of a file for sniffing.
const SNIFF_LEN: u64 = 512;

const OCTET_STREAM: &str = "application/octet-stream";
const URL_MIME: &str = "text/html";
const UNKNOWN_FORMAT: &str = "unknown";

/// Magic-byte signature at a fixed offset.
struct Signature {
    offset: usize,
    magic: &'static [u8],
    mime: &'static str,
}

const SIGNATURES: &[Signature] = &[
    Signature { offset: 0, magic: b"\xFF\xD8\xFF", mime: "image/jpeg" },
    Signature { offset: 0, magic: b"\x89PNG\r\n\x1A\n", mime: "image/png" },
    Signature { offset: 0, magic: b"GIF87a", mime: "image/gif" },
    Signature { offset: 0, magic: b"GIF89a", mime: "image/gif" },
    Signature { offset: 0, magic: b"II*\x00", mime: "image/tiff" },
    Signature { offset: 0, magic: b"MM\x00*", mime: "image/tiff" },
    Signature { offset: 0, magic: b"BM", mime: "image/bmp" },
    Signature { offset: 0, magic: b"fLaC", mime: "audio/flac" },
    Signature { offset: 0, magic: b"OggS", mime: "audio/ogg" },
    Signature { offset: 0, magic: b"ID3", mime: "audio/mpeg" },
    Signature { offset: 0, magic: b"%PDF-", mime: "application/pdf" },
];

/// RIFF containers: `RIFF....<form>`.
const RIFF_FORMS: &[(&[u8], &str)] = &[
    (b"WEBP", "image/webp"),
    (b"WAVE", "audio/x-wav"),
    (b"AVI ", "video/x-msvideo"),
];

const EBML_MAGIC: &[u8] = b"\x1A\x45\xDF\xA3";

const EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("wav", "audio/x-wav"),
    ("mp3", "audio/mpeg"),
    ("flac", "audio/flac"),
    ("ogg", "audio/ogg"),
    ("m4a", "audio/mp4"),
    ("pdf", "application/pdf"),
    ("json", "application/json"),
    ("txt", "text/plain"),
    ("html", "text/html"),
    ("htm", "text/html"),
];

/// Stateless content classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentClassifier;

impl ContentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// A URL with both a scheme and a host is `url` content whose format is
    /// the scheme. Anything else is `unknown`.
    pub fn classify_url(&self, raw: &str) -> Classification {
        let parsed = Url::parse(raw.trim()).ok();
        let classification = match parsed {
            Some(url) if url.host_str().is_some_and(|h| !h.is_empty()) => Classification::new(
                "url",
                Some(url.scheme().to_string()),
                Some(URL_MIME.to_string()),
            ),
            _ => Classification::unknown(),
        };
        log_resolved(&classification);
        classification
    }

    /// Classify file content by its leading bytes, falling back to the
    /// extension of `name`, then to `application/octet-stream`.
    pub fn classify_bytes(&self, name: &str, head: &[u8]) -> Classification {
        let mime = sniff(head)
            .or_else(|| mime_from_extension(name))
            .unwrap_or(OCTET_STREAM);
        let classification = from_mime(mime);
        log_resolved(&classification);
        classification
    }

    /// Read the head of `path` and classify it.
    pub fn classify_file(&self, path: &Path) -> Result<Classification, InputError> {
        let unreadable = |e: std::io::Error| InputError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        };
        let file = File::open(path).map_err(unreadable)?;
        let mut head = Vec::with_capacity(SNIFF_LEN as usize);
        file.take(SNIFF_LEN)
            .read_to_end(&mut head)
            .map_err(unreadable)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(self.classify_bytes(&name, &head))
    }
}

fn sniff(head: &[u8]) -> Option<&'static str> {
    if let Some(sig) = SIGNATURES
        .iter()
        .find(|s| head.get(s.offset..s.offset + s.magic.len()) == Some(s.magic))
    {
        return Some(sig.mime);
    }

    if head.starts_with(b"RIFF") {
        if let Some(form) = head.get(8..12) {
            if let Some((_, mime)) = RIFF_FORMS.iter().find(|(f, _)| *f == form) {
                return Some(*mime);
            }
        }
    }

    // ISO base media: `....ftyp<brand>`
    if head.get(4..8) == Some(b"ftyp".as_slice()) {
        return Some(match head.get(8..12) {
            Some(b"qt  ") => "video/quicktime",
            Some(b"M4A ") => "audio/mp4",
            _ => "video/mp4",
        });
    }

    if head.starts_with(EBML_MAGIC) {
        let is_webm = head.windows(4).any(|w| w == b"webm");
        return Some(if is_webm { "video/webm" } else { "video/x-matroska" });
    }

    // MPEG audio frame sync without an ID3 tag.
    if let [0xFF, second, ..] = head {
        if matches!(second, 0xFB | 0xF3 | 0xF2) {
            return Some("audio/mpeg");
        }
    }

    None
}

fn mime_from_extension(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

fn from_mime(mime: &str) -> Classification {
    let (top, sub) = mime.split_once('/').unwrap_or((mime, ""));
    let format = if sub.is_empty() { UNKNOWN_FORMAT } else { sub };
    Classification::new(top, Some(format.to_string()), Some(mime.to_string()))
}

fn log_resolved(classification: &Classification) {
    events::classification_resolved(
        &classification.content_type,
        classification.format.as_deref().unwrap_or(UNKNOWN_FORMAT),
    );
}
