//! Application settings.

use std::env;
use std::path::PathBuf;

/// Default classifier directory, relative to the working directory.
///
/// The layout is `<dir>/<storage_key>_clf.p`, one file per study
/// characteristic, produced by the offline model export.
pub const DEFAULT_MODEL_DIR: &str = "robots/study_chars";

/// Environment variable overriding the classifier directory.
pub const MODEL_DIR_ENV: &str = "TRIALBOT_MODELS";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the serialized classifiers.
    pub model_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
        }
    }
}

impl Settings {
    /// Create settings with a custom classifier directory.
    pub fn with_model_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: dir.into(),
        }
    }

    /// Resolve settings from an optional explicit override, falling back to
    /// the `TRIALBOT_MODELS` environment variable, then the default layout.
    pub fn resolve(model_dir: Option<PathBuf>) -> Self {
        let model_dir = model_dir
            .or_else(|| env::var_os(MODEL_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR));
        Self { model_dir }
    }
}
