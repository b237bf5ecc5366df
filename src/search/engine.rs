//! Fusion and ranking over a full catalog snapshot.
//!
//! Each search is a pure, stateless pass: fetch the complete corpus from
//! the injected accessor (fresh every call, never a cached snapshot),
//! score every record, filter by threshold, stable-sort, truncate. The
//! engine writes nothing, so concurrent searches need no locking beyond
//! what the accessor itself provides.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::model::types::SearchResult;
use crate::search::lemma::Lemmatizer;
use crate::search::scorer::RelevanceScorer;
use crate::storage::catalog::{CatalogAccessor, CatalogError};

/// Search failure surfaced to callers.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The corpus could not be fetched; no partial results are returned.
    #[error("corpus unavailable: {0}")]
    Corpus(#[from] CatalogError),
}

/// The relevance engine: scorer + injected catalog + tunables.
pub struct SearchEngine {
    catalog: Box<dyn CatalogAccessor>,
    scorer: RelevanceScorer,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(
        catalog: Box<dyn CatalogAccessor>,
        lemmatizer: Arc<dyn Lemmatizer>,
        config: SearchConfig,
    ) -> Self {
        let scorer = RelevanceScorer::new(lemmatizer, config.clone());
        Self {
            catalog,
            scorer,
            config,
        }
    }

    /// Rank the corpus against `query` and return at most `limit` results,
    /// best first. A whitespace-only query short-circuits to an empty list
    /// without touching the catalog.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, SearchError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let forms = self.scorer.query_forms(query);
        info!(
            literal = %forms.literal,
            synonyms = %forms.synonyms,
            limit = limit,
            "search_start"
        );

        let records = self.catalog.all_records()?;
        let corpus_size = records.len();

        let mut hits: Vec<SearchResult> = Vec::new();
        for record in records {
            let score = self.scorer.score(&forms, &record);
            if score > self.config.score_threshold {
                debug!(id = record.id, score = score, "record qualified");
                hits.push(SearchResult {
                    record,
                    search_score: score,
                });
            }
        }

        // Stable sort: equal scores keep ascending-id corpus order.
        hits.sort_by(|a, b| b.search_score.total_cmp(&a.search_score));
        hits.truncate(limit);

        info!(corpus = corpus_size, hits = hits.len(), "search_done");
        Ok(hits)
    }
}
