//! Query and record text normalization.
//!
//! Everything the scorer compares goes through the same pipeline first:
//! NFC + lowercase, tag/punctuation stripping, stopword and short-token
//! removal, lemmatization, and (for queries and AI keywords) synonym
//! expansion. The output is deterministic for a given (text, mode,
//! lemmatizer) triple, which keeps scores reproducible across calls.
//!
//! Normalization is recomputed on every search; nothing here is cached.
//!
//! # Modes
//!
//! - [`NormalizeMode::Literal`] emits the primary lemma of each token.
//! - [`NormalizeMode::ExpandSynonyms`] additionally consults the domain
//!   synonym table: when any candidate lemma of a token has an entry, the
//!   canonical phrase words are emitted instead of the lemma. This is what
//!   lets a colloquial "садик" query reach a record that only ever says
//!   "доу дошкольное".

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

use crate::search::lemma::Lemmatizer;

/// Markup-like tag spans (`<...>`), stripped before matching.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("static regex"));

/// Everything that is not a word character or whitespace.
static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("static regex"));

/// Domain-noise tokens excluded before matching. Category abbreviations
/// (аис/гис/егис) carry no signal because nearly every record has one.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "система",
        "сервис",
        "продукт",
        "приложение",
        "веб",
        "для",
        "на",
        "в",
        "и",
        "или",
        "по",
        "с",
        "от",
        "как",
        "это",
        "предназначен",
        "автоматизации",
        "обеспечения",
        "реализации",
        "функций",
        "процессов",
        "аис",
        "гис",
        "егис",
    ]
    .into_iter()
    .collect()
});

/// Colloquial domain term (as a lemma) -> canonical vocabulary phrase.
static SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("сад", "доу дошкольное"),
        ("садик", "доу дошкольное"),
        ("школа", "оу сош общее образование"),
        ("колледж", "спо профтех"),
        ("вуз", "впо высшее"),
        ("кружок", "удо дополнительное"),
        ("секция", "удо дополнительное"),
        ("еда", "питание"),
        ("проход", "скуд турникет"),
        ("ученик", "обучающийся учащийся"),
    ]
    .into_iter()
    .collect()
});

/// Output strategy of [`Normalizer::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Emit the primary lemma of every surviving token.
    Literal,
    /// Substitute synonym-table phrases for colloquial terms.
    ExpandSynonyms,
}

/// Text normalization stage, parameterized by an injected [`Lemmatizer`].
pub struct Normalizer {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl Normalizer {
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        Self { lemmatizer }
    }

    /// Normalize `text` per the pipeline above. `None` and empty input map
    /// to the empty string; the output never contains duplicate words and
    /// preserves first-seen order.
    pub fn normalize(&self, text: Option<&str>, mode: NormalizeMode) -> String {
        let raw = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return String::new(),
        };

        let lowered = raw.nfc().collect::<String>().to_lowercase();
        let no_tags = TAG_RE.replace_all(&lowered, " ");
        let words_only = PUNCT_RE.replace_all(&no_tags, " ");

        let mut seen: HashSet<String> = HashSet::new();
        let mut out: Vec<String> = Vec::new();

        for token in words_only.split_whitespace() {
            if token.chars().count() < 2 || STOP_WORDS.contains(token) {
                continue;
            }

            // Capability miss degrades to the surface token; a single
            // unanalyzable word must never abort the whole normalization.
            let candidates = self.lemmatizer.candidate_lemmas(token);
            let primary = self
                .lemmatizer
                .primary_lemma(token)
                .unwrap_or_else(|| token.to_string());

            if mode == NormalizeMode::ExpandSynonyms {
                let mut phrases: Vec<&str> = Vec::new();
                if candidates.is_empty() {
                    if let Some(phrase) = SYNONYMS.get(token).copied() {
                        phrases.push(phrase);
                    }
                } else {
                    for lemma in &candidates {
                        if let Some(phrase) = SYNONYMS.get(lemma.as_str()).copied() {
                            phrases.push(phrase);
                        }
                    }
                }
                if !phrases.is_empty() {
                    for phrase in phrases {
                        for word in phrase.split_whitespace() {
                            push_unique(word, &mut out, &mut seen);
                        }
                    }
                    continue;
                }
            }

            push_unique(&primary, &mut out, &mut seen);
        }

        out.join(" ")
    }
}

fn push_unique(word: &str, out: &mut Vec<String>, seen: &mut HashSet<String>) {
    if seen.insert(word.to_string()) {
        out.push(word.to_string());
    }
}
