//! Study characteristics annotator.
//!
//! Predicts trial design fields (allocation, masking, phase, ...) from the
//! leading sentences of a report. Models are trained on registry fields;
//! this backend does no span annotation and simply predicts labels.

use std::path::Path;

use tracing::debug;

use trialbot::models::{AnnotationResult, StudyCharacteristic};

use super::super::classifier::{LinearModel, ModelStore};
use super::super::features::HashingVectorizer;
use super::super::sentences::{leading_sentences, FIRST_N};
use super::annotator::Annotator;
use super::types::AnnotationError;

/// Marginalia type and title for this backend's output.
const ANNOTATION_TITLE: &str = "Study Characteristics";

/// Predicts study characteristics from the approximate abstract of a
/// clinical trial report.
#[derive(Debug)]
pub struct StudyCharsAnnotator {
    vectorizer: HashingVectorizer,
    /// Field/classifier pairs in report order.
    models: Vec<(StudyCharacteristic, LinearModel)>,
}

impl StudyCharsAnnotator {
    /// Load every classifier from `store`, in report order, failing on the
    /// first missing or corrupt model file. A failed load leaves no usable
    /// annotator behind.
    pub fn from_store(store: &ModelStore) -> Result<Self, AnnotationError> {
        let mut models = Vec::with_capacity(StudyCharacteristic::ALL.len());
        for characteristic in StudyCharacteristic::ALL {
            let model = store.load(characteristic)?;
            models.push((characteristic, model));
        }
        debug!(count = models.len(), "study characteristics classifiers ready");

        Ok(Self {
            vectorizer: HashingVectorizer::new(),
            models,
        })
    }

    /// Convenience constructor over the standard directory layout.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, AnnotationError> {
        Self::from_store(&ModelStore::new(dir.as_ref()))
    }
}

impl Annotator for StudyCharsAnnotator {
    fn annotation_type(&self) -> &str {
        "study_characteristics"
    }

    fn display_name(&self) -> &str {
        ANNOTATION_TITLE
    }

    fn annotate(&self, document_text: &str) -> Result<AnnotationResult, AnnotationError> {
        // Approximate the abstract as the leading sentences, then vectorize
        // once; the same vector feeds all eight classifiers.
        let abstract_text = leading_sentences(document_text, FIRST_N);
        let features = self.vectorizer.transform(&abstract_text);

        let lines: Vec<String> = self
            .models
            .iter()
            .map(|(characteristic, model)| {
                format!("**{}**: {}", characteristic, model.predict(&features))
            })
            .collect();

        Ok(AnnotationResult::single(
            ANNOTATION_TITLE,
            ANNOTATION_TITLE,
            lines.join("\n\n"),
        ))
    }
}
