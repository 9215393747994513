//! File attachment validation for CV and logo uploads.
//!
//! A selected file is checked against an [`AttachmentPolicy`] (allowed MIME
//! types, maximum byte size) before being retained. Rejection never disturbs
//! a previously accepted file: callers replace their attachment only on
//! success.

use serde::Serialize;

/// MIME types accepted for uploads: PDF, DOC, DOCX, JPEG, PNG.
pub const DOCUMENT_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
];

/// Default policy for student CV uploads: documents up to 10 MiB.
pub const CV_POLICY: AttachmentPolicy = AttachmentPolicy {
    allowed_types: DOCUMENT_MIME_TYPES,
    max_bytes: 10 * 1024 * 1024,
};

/// Default policy for startup logo uploads: documents up to 5 MiB.
pub const LOGO_POLICY: AttachmentPolicy = AttachmentPolicy {
    allowed_types: DOCUMENT_MIME_TYPES,
    max_bytes: 5 * 1024 * 1024,
};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// What an attachment gate accepts. Limits are data, not code: the CV and
/// logo policies differ only in their field values.
#[derive(Debug, Clone, Copy)]
pub struct AttachmentPolicy {
    /// Allow-listed MIME types.
    pub allowed_types: &'static [&'static str],
    /// Maximum accepted size in bytes.
    pub max_bytes: u64,
}

/// A user-selected file that has not yet passed validation.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    /// Original filename, used as the display preview after acceptance.
    pub name: String,
    /// Declared MIME type.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl FileCandidate {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// A validated, retained upload.
#[derive(Debug, Clone)]
pub struct AttachedFile {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl AttachedFile {
    /// User-visible filename shown as the upload preview.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the attachment, yielding `(name, content_type, bytes)`.
    pub fn into_parts(self) -> (String, String, Vec<u8>) {
        (self.name, self.content_type, self.bytes)
    }
}

/// Why a candidate file was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FileRejection {
    #[error("Unsupported file type '{content_type}'")]
    UnsupportedType { content_type: String },

    #[error("File is {size} bytes, above the {max_bytes} byte limit")]
    TooLarge { size: u64, max_bytes: u64 },
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Gate a file selection against a policy.
///
/// Checks the MIME type first, then the size. On acceptance the candidate
/// is converted into an [`AttachedFile`] keeping its original filename as
/// the preview. On rejection the caller keeps whatever attachment it
/// already had.
pub fn accept_file(
    candidate: FileCandidate,
    policy: &AttachmentPolicy,
) -> Result<AttachedFile, FileRejection> {
    if !policy
        .allowed_types
        .contains(&candidate.content_type.as_str())
    {
        return Err(FileRejection::UnsupportedType {
            content_type: candidate.content_type,
        });
    }

    let size = candidate.size();
    if size > policy.max_bytes {
        return Err(FileRejection::TooLarge {
            size,
            max_bytes: policy.max_bytes,
        });
    }

    Ok(AttachedFile {
        name: candidate.name,
        content_type: candidate.content_type,
        bytes: candidate.bytes,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
