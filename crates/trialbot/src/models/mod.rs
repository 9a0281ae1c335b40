//! Domain model types.

mod marginalia;
mod study_characteristic;

pub use marginalia::{AnnotationResult, Marginalia};
pub use study_characteristic::StudyCharacteristic;
