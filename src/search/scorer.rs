//! Per-record relevance scoring.
//!
//! A query is normalized once into its literal and synonym-expanded forms;
//! each record then contributes three fuzzy channels (name/description,
//! AI keywords, wiki content) that are fused with configured weights, plus
//! a flat bonus for records marked as actively deployed.

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::model::types::SystemRecord;
use crate::search::lemma::Lemmatizer;
use crate::search::normalize::{NormalizeMode, Normalizer};
use crate::search::similarity::token_set_ratio;

/// Both normalized forms of a query, computed once per search.
#[derive(Debug, Clone)]
pub struct QueryForms {
    pub literal: String,
    pub synonyms: String,
}

/// Weighted-fusion scorer over normalized record fields.
pub struct RelevanceScorer {
    normalizer: Normalizer,
    config: SearchConfig,
}

impl RelevanceScorer {
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>, config: SearchConfig) -> Self {
        Self {
            normalizer: Normalizer::new(lemmatizer),
            config,
        }
    }

    /// Normalize a raw query in both modes.
    pub fn query_forms(&self, query: &str) -> QueryForms {
        QueryForms {
            literal: self.normalizer.normalize(Some(query), NormalizeMode::Literal),
            synonyms: self
                .normalizer
                .normalize(Some(query), NormalizeMode::ExpandSynonyms),
        }
    }

    /// Fused relevance of `record` for the prepared query forms.
    ///
    /// Missing record fields contribute 0 to their channel. The result is
    /// always finite; a degenerate value is sanitized to 0 so nothing
    /// non-finite can cross the engine boundary.
    pub fn score(&self, query: &QueryForms, record: &SystemRecord) -> f64 {
        let name = self
            .normalizer
            .normalize(record.product_name.as_deref(), NormalizeMode::Literal);
        let desc = self
            .normalizer
            .normalize(record.description.as_deref(), NormalizeMode::Literal);

        let score_literal = token_set_ratio(&query.literal, &name)
            .max(token_set_ratio(&query.literal, &desc));

        // The synonym pass only matters when expansion actually changed
        // the query.
        let score_synonym = if query.literal != query.synonyms {
            token_set_ratio(&query.synonyms, &name).max(token_set_ratio(&query.synonyms, &desc))
        } else {
            0.0
        };

        let base = score_literal.max(score_synonym);

        let wiki = self
            .normalizer
            .normalize(record.wiki_content.as_deref(), NormalizeMode::Literal);
        let wiki_score = if wiki.is_empty() {
            0.0
        } else {
            token_set_ratio(&query.synonyms, &wiki)
        };

        let ai = self
            .normalizer
            .normalize(record.ai_keywords.as_deref(), NormalizeMode::ExpandSynonyms);
        let ai_score = if ai.is_empty() {
            0.0
        } else {
            token_set_ratio(&query.synonyms, &ai)
        };

        let mut score = self.config.base_weight * base
            + self.config.ai_weight * ai_score
            + self.config.wiki_weight * wiki_score;

        if let Some(status) = record.status.as_deref() {
            if self.config.status_is_active(&status.to_lowercase()) {
                score += self.config.status_bonus;
            }
        }

        if score.is_finite() { score } else { 0.0 }
    }
}
