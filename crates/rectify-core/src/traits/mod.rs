//! Seam traits implemented outside this crate.

use crate::errors::FetchError;

/// The external fetch collaborator. Implementations own their own
/// timeout and transport; the cache only sees the document text or a
/// `FetchError`.
pub trait DocumentSource: Send + Sync {
    fn fetch_document(&self) -> Result<String, FetchError>;
}
