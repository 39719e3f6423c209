//! Display-name helpers: extension stripping and generated names for media without a filename.

/// Returns `name` without its extension.
///
/// The extension is the suffix starting at the last `.` of the final path element, so
/// `archive.tar.gz` → `archive.tar`, `README` → `README` and `.env` → `""`.
pub fn file_stem(name: &str) -> &str {
    match name.rfind(['.', '/']) {
        Some(i) if name.as_bytes()[i] == b'.' => &name[..i],
        _ => name,
    }
}

/// Kind of upload, used to pick a generated name and the send method on download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Document,
    Photo,
    Video,
}

impl MediaKind {
    fn prefix(self) -> &'static str {
        match self {
            MediaKind::Document => "document_",
            MediaKind::Photo => "photo_",
            MediaKind::Video => "video_",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            MediaKind::Document => "",
            MediaKind::Photo => ".jpg",
            MediaKind::Video => ".mp4",
        }
    }

    /// Infers the kind from a stored display name: `photo_*` and `video_*` are media,
    /// everything else is sent back as a document.
    pub fn of_display_name(name: &str) -> Self {
        let stem = file_stem(name);
        if stem.starts_with(MediaKind::Photo.prefix()) {
            MediaKind::Photo
        } else if stem.starts_with(MediaKind::Video.prefix()) {
            MediaKind::Video
        } else {
            MediaKind::Document
        }
    }
}

/// Name for an upload without a filename: `photo_<ts>.jpg`, `video_<ts>.mp4`, `document_<ts>`.
pub fn generated_name(kind: MediaKind, unix_timestamp: i64) -> String {
    format!("{}{}{}", kind.prefix(), unix_timestamp, kind.extension())
}
