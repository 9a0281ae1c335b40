//! trialbot-annotate - study characteristics prediction services.
//!
//! Takes the full text of a clinical trial report and predicts study design
//! fields (allocation, masking, phase, ...) from its leading sentences.
//! Models are trained on registry fields; the annotator does no span
//! annotation and simply predicts one label per field.

pub mod services;
