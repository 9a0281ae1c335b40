//! Configuration.

mod settings;

pub use settings::{Settings, DEFAULT_MODEL_DIR, MODEL_DIR_ENV};
