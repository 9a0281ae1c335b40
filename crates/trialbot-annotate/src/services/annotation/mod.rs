//! Annotation pipeline - trait-based abstraction for annotation backends.
//!
//! Each backend implements the `Annotator` trait and returns the shared
//! marginalia envelope, so outputs from different backends can be merged
//! into a single rendering pass.

mod annotator;
mod study_chars_annotator;
mod types;

pub use annotator::Annotator;
pub use study_chars_annotator::StudyCharsAnnotator;
pub use types::AnnotationError;
