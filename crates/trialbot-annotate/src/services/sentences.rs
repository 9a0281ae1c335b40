//! Rule-based sentence segmentation.
//!
//! Splits report text on terminal punctuation with guards for common
//! abbreviations, initials, and decimal numbers. Trial reports front-load
//! their abstracts, so the annotator only ever consumes the leading
//! sentences; see [`leading_sentences`].

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Number of leading sentences used to approximate a report's abstract.
pub const FIRST_N: usize = 20;

/// Candidate sentence boundary: terminal punctuation, optional closing
/// quotes/brackets, then whitespace.
static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([.!?]+["')\]]*)(\s+)"#).unwrap());

/// Tokens whose trailing period does not end a sentence.
static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "dr", "mr", "mrs", "ms", "prof", "st", "jr", "sr", "vs", "etc", "al", "cf", "ca",
        "approx", "fig", "figs", "no", "nos", "ref", "refs", "vol", "pp", "dept", "eds",
    ]
    .into_iter()
    .collect()
});

/// Word (if any) immediately preceding byte offset `end` in `text`.
fn preceding_word(text: &str, end: usize) -> &str {
    let head = &text[..end];
    let start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric())
        .last()
        .map(|(i, _)| i)
        .unwrap_or(end);
    &head[start..]
}

/// Whether a sentence may start at byte offset `start`.
fn starts_sentence(text: &str, start: usize) -> bool {
    match text[start..].chars().next() {
        Some(c) => c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | '(' | '['),
        None => false,
    }
}

/// Split `text` into trimmed sentences.
///
/// A period does not split after a known abbreviation or a single-letter
/// initial, and a boundary is only taken when the following text looks like
/// a sentence opening. Text after the last terminator forms a final
/// sentence. Empty and whitespace-only input yield an empty vec.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0usize;

    for caps in BOUNDARY.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let terminal = caps.get(1).unwrap().as_str();

        if !starts_sentence(text, whole.end()) {
            continue;
        }

        if terminal == "." {
            let prev = preceding_word(text, whole.start());
            let is_initial = prev.len() == 1 && prev.chars().all(char::is_alphabetic);
            if is_initial || ABBREVIATIONS.contains(prev.to_lowercase().as_str()) {
                continue;
            }
        }

        let sentence = text[start..whole.start() + terminal.len()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = whole.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// First `n` sentences of `text`, joined with single spaces.
///
/// Documents with fewer sentences use all of them; zero detected sentences
/// yield an empty string.
pub fn leading_sentences(text: &str, n: usize) -> String {
    let sentences = split_sentences(text);
    sentences[..n.min(sentences.len())].join(" ")
}
