//! Output envelope shared across annotation backends.

use serde::{Deserialize, Serialize};

/// One annotation block destined for margin rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marginalia {
    /// Annotation category, e.g. "Study Characteristics".
    #[serde(rename = "type")]
    pub annotation_type: String,
    /// Heading shown above the block.
    pub title: String,
    /// Markdown body of the block.
    pub description: String,
}

/// Envelope wrapping an annotator's output.
///
/// Every backend returns this shape so results from different annotators can
/// be merged into one rendering pass downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationResult {
    pub marginalia: Vec<Marginalia>,
}

impl AnnotationResult {
    /// Wrap a single block in the envelope.
    pub fn single(
        annotation_type: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            marginalia: vec![Marginalia {
                annotation_type: annotation_type.into(),
                title: title.into(),
                description: description.into(),
            }],
        }
    }
}
