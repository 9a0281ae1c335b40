pub mod annotation;
pub mod classifier;
pub mod features;
pub mod sentences;
pub mod stop_words;

#[allow(unused_imports)]
pub use annotation::{AnnotationError, Annotator, StudyCharsAnnotator};
#[allow(unused_imports)]
pub use classifier::{LinearModel, ModelError, ModelStore, WeightRow};
#[allow(unused_imports)]
pub use features::{FeatureVector, HashingVectorizer, N_FEATURES};
#[allow(unused_imports)]
pub use sentences::{leading_sentences, split_sentences, FIRST_N};
