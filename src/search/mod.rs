//! Relevance engine.
//!
//! - **[`lemma`]**: Lemmatizer capability trait + dictionary implementation.
//! - **[`normalize`]**: text cleanup, stopwords, lemmatization, synonyms.
//! - **[`similarity`]**: token-set fuzzy similarity primitive.
//! - **[`scorer`]**: weighted score fusion per record.
//! - **[`engine`]**: threshold filtering, ranking, and limits.

pub mod engine;
pub mod lemma;
pub mod normalize;
pub mod scorer;
pub mod similarity;
