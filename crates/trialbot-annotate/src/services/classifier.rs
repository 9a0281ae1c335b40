//! Serialized linear classifiers and the on-disk model store.
//!
//! Classifiers are produced by an offline export and loaded once at
//! startup; nothing here mutates or writes them back. The store honors the
//! `robots/study_chars/<storage_key>_clf.p` layout, one file per study
//! characteristic.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use trialbot::models::StudyCharacteristic;

use super::features::{FeatureVector, N_FEATURES};

/// Errors from loading a serialized classifier.
///
/// Both are fatal at construction time: annotators load their full
/// classifier set or nothing.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model file does not exist.
    #[error("model file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The model file exists but cannot be decoded into a usable
    /// classifier (truncated file, format mismatch, version skew).
    #[error("model file {} is corrupt: {}", .path.display(), .reason)]
    Corrupt { path: PathBuf, reason: String },
}

/// Sparse weight row for one class: parallel index/value arrays, indices
/// sorted strictly ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightRow {
    pub indices: Vec<u32>,
    pub values: Vec<f64>,
}

impl WeightRow {
    /// Dot product against a binary feature vector.
    fn dot(&self, features: &FeatureVector) -> f64 {
        let active = features.indices();
        let mut sum = 0.0;
        let mut i = 0;
        let mut j = 0;
        while i < self.indices.len() && j < active.len() {
            match self.indices[i].cmp(&active[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += self.values[i];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// One-vs-rest linear classifier over the hashed feature space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Label strings, one per class.
    pub classes: Vec<String>,
    /// Per-class bias terms.
    pub intercepts: Vec<f64>,
    /// Per-class sparse weights.
    pub weights: Vec<WeightRow>,
    /// Feature-space dimensionality the weights were exported against.
    pub n_features: u32,
}

impl LinearModel {
    /// Score every class and return the winning label.
    ///
    /// Ties resolve to the earliest class, so identical input always yields
    /// the same label; an all-zero vector is decided by the intercepts
    /// alone.
    pub fn predict(&self, features: &FeatureVector) -> &str {
        let mut best = 0usize;
        let mut best_score = f64::NEG_INFINITY;
        for (i, (row, intercept)) in self.weights.iter().zip(&self.intercepts).enumerate() {
            let score = intercept + row.dot(features);
            if score > best_score {
                best = i;
                best_score = score;
            }
        }
        &self.classes[best]
    }

    /// Structural validation of a freshly deserialized model.
    fn validate(&self, path: &Path) -> Result<(), ModelError> {
        let corrupt = |reason: String| ModelError::Corrupt {
            path: path.to_path_buf(),
            reason,
        };

        if self.classes.is_empty() {
            return Err(corrupt("no classes".into()));
        }
        if self.intercepts.len() != self.classes.len() || self.weights.len() != self.classes.len()
        {
            return Err(corrupt(format!(
                "{} classes but {} intercepts and {} weight rows",
                self.classes.len(),
                self.intercepts.len(),
                self.weights.len()
            )));
        }
        if self.n_features != N_FEATURES {
            return Err(corrupt(format!(
                "exported against {} features, extractor uses {}",
                self.n_features, N_FEATURES
            )));
        }
        for row in &self.weights {
            if row.indices.len() != row.values.len() {
                return Err(corrupt(format!(
                    "weight row has {} indices but {} values",
                    row.indices.len(),
                    row.values.len()
                )));
            }
            if row.indices.windows(2).any(|w| w[0] >= w[1]) {
                return Err(corrupt("weight indices not strictly ascending".into()));
            }
            if row.indices.last().is_some_and(|&i| i >= self.n_features) {
                return Err(corrupt("weight index outside feature space".into()));
            }
        }
        Ok(())
    }
}

/// On-disk store of pre-trained classifiers, one per study characteristic.
#[derive(Debug, Clone)]
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the serialized classifier for `characteristic`.
    pub fn model_path(&self, characteristic: StudyCharacteristic) -> PathBuf {
        self.dir
            .join(format!("{}_clf.p", characteristic.storage_key()))
    }

    /// Load and validate one classifier.
    pub fn load(&self, characteristic: StudyCharacteristic) -> Result<LinearModel, ModelError> {
        let path = self.model_path(characteristic);
        let raw = fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ModelError::NotFound { path: path.clone() },
            _ => ModelError::Corrupt {
                path: path.clone(),
                reason: e.to_string(),
            },
        })?;

        let model: LinearModel = serde_json::from_slice(&raw).map_err(|e| ModelError::Corrupt {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        model.validate(&path)?;

        debug!(
            characteristic = %characteristic,
            classes = model.classes.len(),
            "loaded classifier"
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::features::HashingVectorizer;

    fn model(classes: &[&str], intercepts: &[f64], weights: Vec<WeightRow>) -> LinearModel {
        LinearModel {
            classes: classes.iter().map(|s| s.to_string()).collect(),
            intercepts: intercepts.to_vec(),
            weights,
            n_features: N_FEATURES,
        }
    }

    fn no_weights(n: usize) -> Vec<WeightRow> {
        (0..n)
            .map(|_| WeightRow {
                indices: vec![],
                values: vec![],
            })
            .collect()
    }

    #[test]
    fn test_predict_argmax() {
        let vectorizer = HashingVectorizer::new();
        let features = vectorizer.transform("streptomycin");
        let idx = features.indices()[0];

        let model = model(
            &["No", "Yes"],
            &[0.5, 0.0],
            vec![
                WeightRow {
                    indices: vec![],
                    values: vec![],
                },
                WeightRow {
                    indices: vec![idx],
                    values: vec![2.0],
                },
            ],
        );

        assert_eq!(model.predict(&features), "Yes");
        assert_eq!(model.predict(&vectorizer.transform("placebo")), "No");
    }

    #[test]
    fn test_empty_vector_is_decided_by_intercepts() {
        let model = model(&["Treatment", "Prevention"], &[0.1, 0.9], no_weights(2));
        let empty = HashingVectorizer::new().transform("");
        assert_eq!(model.predict(&empty), "Prevention");
    }

    #[test]
    fn test_ties_resolve_to_first_class() {
        let model = model(&["Open Label", "Double-Blind"], &[0.0, 0.0], no_weights(2));
        let empty = HashingVectorizer::new().transform("");
        assert_eq!(model.predict(&empty), "Open Label");
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let err = store.load(StudyCharacteristic::Masking).unwrap_err();
        assert!(matches!(err, ModelError::NotFound { .. }));
    }

    #[test]
    fn test_load_garbage_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let path = store.model_path(StudyCharacteristic::Masking);
        fs::write(&path, b"not a model").unwrap();

        let err = store.load(StudyCharacteristic::Masking).unwrap_err();
        assert!(matches!(err, ModelError::Corrupt { .. }));
    }

    #[test]
    fn test_load_rejects_row_length_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());

        let mut bad = model(&["Yes", "No"], &[0.0, 0.0], no_weights(2));
        bad.weights[0] = WeightRow {
            indices: vec![1, 2],
            values: vec![1.0],
        };
        let path = store.model_path(StudyCharacteristic::Phase);
        fs::write(&path, serde_json::to_vec(&bad).unwrap()).unwrap();

        let err = store.load(StudyCharacteristic::Phase).unwrap_err();
        assert!(matches!(err, ModelError::Corrupt { .. }));
    }

    #[test]
    fn test_load_rejects_feature_space_skew() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());

        let mut bad = model(&["Yes"], &[0.0], no_weights(1));
        bad.n_features = 1 << 16;
        let path = store.model_path(StudyCharacteristic::Gender);
        fs::write(&path, serde_json::to_vec(&bad).unwrap()).unwrap();

        let err = store.load(StudyCharacteristic::Gender).unwrap_err();
        assert!(matches!(err, ModelError::Corrupt { .. }));
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());

        let good = model(&["Both", "Female"], &[0.3, 0.1], no_weights(2));
        let path = store.model_path(StudyCharacteristic::Gender);
        fs::write(&path, serde_json::to_vec(&good).unwrap()).unwrap();

        let loaded = store.load(StudyCharacteristic::Gender).unwrap();
        assert_eq!(loaded.classes, vec!["Both", "Female"]);
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "gender_clf.p"
        );
    }
}
