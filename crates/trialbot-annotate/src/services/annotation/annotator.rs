//! Annotator trait - shared abstraction for annotation backends.

use trialbot::models::AnnotationResult;

use super::types::AnnotationError;

/// A backend that can annotate trial report text.
///
/// Implementations wrap a specific prediction task and expose it through a
/// uniform interface. All state is read-only after construction, so a
/// backend can serve concurrent callers without locking.
pub trait Annotator: Send + Sync {
    /// Key identifying this backend's output, e.g. "study_characteristics".
    fn annotation_type(&self) -> &str;

    /// Human-readable name for CLI output.
    fn display_name(&self) -> &str;

    /// Annotate a single document given its full decoded text.
    fn annotate(&self, document_text: &str) -> Result<AnnotationResult, AnnotationError>;
}
