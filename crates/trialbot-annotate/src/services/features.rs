//! Text vectorization into a fixed hashed feature space.
//!
//! Every classifier consumes the same representation: binary presence
//! indicators for unigrams and bigrams, hashed into a constant number of
//! buckets. Hashing keeps the dimensionality fixed regardless of
//! vocabulary, so there is no vocabulary-mismatch failure mode.

use std::sync::LazyLock;

use regex::Regex;

use super::stop_words::is_stop_word;

/// Dimensionality of the hashed feature space.
pub const N_FEATURES: u32 = 1 << 20;

/// Token pattern: runs of word characters, two or more.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Sparse binary feature vector over the hashed space.
///
/// Holds the sorted, deduplicated indices of active buckets; every active
/// bucket has implicit value 1.0 (presence, not count). Created per
/// document and discarded after prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    indices: Vec<u32>,
}

impl FeatureVector {
    /// Active bucket indices, sorted ascending.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Hashed n-gram vectorizer shared by all classifiers.
///
/// Configuration is fixed (unigrams and bigrams over stop-word-filtered
/// lowercase tokens, binary values, [`N_FEATURES`] buckets) and must match
/// what the model export was produced against. Stateless; `transform` is a
/// pure function.
#[derive(Debug, Clone)]
pub struct HashingVectorizer {
    n_features: u32,
}

impl Default for HashingVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HashingVectorizer {
    pub fn new() -> Self {
        Self {
            n_features: N_FEATURES,
        }
    }

    pub fn n_features(&self) -> u32 {
        self.n_features
    }

    /// Vectorize one document.
    ///
    /// Empty and whitespace-only text produce an empty vector; classifiers
    /// still predict from it (their intercepts decide).
    pub fn transform(&self, text: &str) -> FeatureVector {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = TOKEN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !is_stop_word(t))
            .collect();

        let mut indices = Vec::with_capacity(tokens.len() * 2);
        for token in &tokens {
            indices.push(self.bucket(token));
        }
        for pair in tokens.windows(2) {
            indices.push(self.bucket(&format!("{} {}", pair[0], pair[1])));
        }

        indices.sort_unstable();
        indices.dedup();
        FeatureVector { indices }
    }

    /// Stable bucket index for one term.
    fn bucket(&self, term: &str) -> u32 {
        let hash = blake3::hash(term.as_bytes());
        let head = u32::from_le_bytes(hash.as_bytes()[..4].try_into().unwrap());
        head % self.n_features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_gives_empty_vector() {
        let vec = HashingVectorizer::new().transform("");
        assert!(vec.is_empty());
        assert!(HashingVectorizer::new().transform("  \n\t ").is_empty());
    }

    #[test]
    fn test_stop_words_are_removed() {
        let vectorizer = HashingVectorizer::new();
        assert!(vectorizer.transform("the of and was").is_empty());
        // "the" is filtered before bigram formation, so only one unigram remains.
        assert_eq!(vectorizer.transform("the trial").len(), 1);
    }

    #[test]
    fn test_single_characters_are_not_tokens() {
        assert!(HashingVectorizer::new().transform("a b c 1 2").is_empty());
    }

    #[test]
    fn test_bigrams_are_hashed_alongside_unigrams() {
        let vectorizer = HashingVectorizer::new();
        let both = vectorizer.transform("aspirin placebo");
        assert_eq!(both.len(), 3);

        let aspirin = vectorizer.transform("aspirin");
        let placebo = vectorizer.transform("placebo");
        assert!(both.indices().contains(&aspirin.indices()[0]));
        assert!(both.indices().contains(&placebo.indices()[0]));
    }

    #[test]
    fn test_presence_not_count() {
        // Repetition adds no new unigram bucket; only the repeated-word
        // bigram is new.
        let vec = HashingVectorizer::new().transform("dose dose dose");
        assert_eq!(vec.len(), 2);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let vectorizer = HashingVectorizer::new();
        let text = "Randomised controlled trial of streptomycin in pulmonary tuberculosis.";
        assert_eq!(vectorizer.transform(text), vectorizer.transform(text));
    }

    #[test]
    fn test_case_is_folded() {
        let vectorizer = HashingVectorizer::new();
        assert_eq!(
            vectorizer.transform("STREPTOMYCIN"),
            vectorizer.transform("streptomycin")
        );
    }

    #[test]
    fn test_indices_stay_in_bounds() {
        let vec = HashingVectorizer::new()
            .transform("streptomycin treatment pulmonary tuberculosis investigation");
        assert!(vec.indices().iter().all(|&i| i < N_FEATURES));
    }
}
