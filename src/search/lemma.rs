//! Lemmatization capability.
//!
//! Russian queries are morphologically rich: "садику", "садиком" and
//! "садики" should all match a record that mentions "садик". The engine
//! only needs two operations from a morphological analyzer, so the whole
//! capability sits behind the [`Lemmatizer`] trait. A dictionary-based,
//! statistical, or remote implementation can be swapped in without
//! touching the normalizer.
//!
//! A token the capability cannot analyze is not an error: the normalizer
//! falls back to the lowercase surface form and keeps going.

use std::collections::HashMap;

/// Morphological analysis seam used by the normalizer.
pub trait Lemmatizer: Send + Sync {
    /// The most likely dictionary form of `token`, or `None` when the
    /// capability has no analysis for it.
    fn primary_lemma(&self, token: &str) -> Option<String>;

    /// All plausible dictionary forms of `token`, most likely first.
    /// Empty when the capability has no analysis.
    fn candidate_lemmas(&self, token: &str) -> Vec<String>;
}

/// Surface form -> candidate lemmas, most likely first.
///
/// Covers the inflection neighborhood of the domain vocabulary (the words
/// the synonym table and typical catalog queries revolve around). Every
/// word that appears inside a synonym expansion phrase is a fixed point
/// here, so expanded query tokens and lemmatized record tokens land in the
/// same space.
const BUILTIN_DICTIONARY: &[(&str, &[&str])] = &[
    // сад / садик (kindergarten, colloquial)
    ("сад", &["сад"]),
    ("сада", &["сад"]),
    ("саду", &["сад"]),
    ("садом", &["сад"]),
    ("саде", &["сад"]),
    ("сады", &["сад"]),
    ("садов", &["сад"]),
    ("садам", &["сад"]),
    ("садик", &["садик"]),
    ("садика", &["садик"]),
    ("садику", &["садик"]),
    ("садиком", &["садик"]),
    ("садики", &["садик"]),
    ("садиков", &["садик"]),
    // школа
    ("школа", &["школа"]),
    ("школы", &["школа"]),
    ("школу", &["школа"]),
    ("школе", &["школа"]),
    ("школой", &["школа"]),
    ("школ", &["школа"]),
    ("школам", &["школа"]),
    ("школах", &["школа"]),
    // колледж
    ("колледж", &["колледж"]),
    ("колледжа", &["колледж"]),
    ("колледжу", &["колледж"]),
    ("колледже", &["колледж"]),
    ("колледжи", &["колледж"]),
    ("колледжей", &["колледж"]),
    // вуз
    ("вуз", &["вуз"]),
    ("вуза", &["вуз"]),
    ("вузу", &["вуз"]),
    ("вузе", &["вуз"]),
    ("вузы", &["вуз"]),
    ("вузов", &["вуз"]),
    // кружок
    ("кружок", &["кружок"]),
    ("кружка", &["кружок"]),
    ("кружку", &["кружок"]),
    ("кружке", &["кружок"]),
    ("кружки", &["кружок"]),
    ("кружков", &["кружок"]),
    // секция
    ("секция", &["секция"]),
    ("секции", &["секция"]),
    ("секцию", &["секция"]),
    ("секцией", &["секция"]),
    ("секций", &["секция"]),
    // еда ("еду" is ambiguous: accusative of еда or 1sg of ехать)
    ("еда", &["еда"]),
    ("еды", &["еда"]),
    ("еде", &["еда"]),
    ("едой", &["еда"]),
    ("еду", &["еда", "ехать"]),
    // проход
    ("проход", &["проход"]),
    ("прохода", &["проход"]),
    ("проходу", &["проход"]),
    ("проходе", &["проход"]),
    ("проходы", &["проход"]),
    ("проходов", &["проход"]),
    // ученик
    ("ученик", &["ученик"]),
    ("ученика", &["ученик"]),
    ("ученику", &["ученик"]),
    ("учеником", &["ученик"]),
    ("ученике", &["ученик"]),
    ("ученики", &["ученик"]),
    ("учеников", &["ученик"]),
    ("ученикам", &["ученик"]),
    ("учениками", &["ученик"]),
    // expansion-phrase vocabulary: inflected forms map onto the phrase word
    ("обучающийся", &["обучающийся"]),
    ("обучающегося", &["обучающийся"]),
    ("обучающиеся", &["обучающийся"]),
    ("обучающихся", &["обучающийся"]),
    ("учащийся", &["учащийся"]),
    ("учащегося", &["учащийся"]),
    ("учащиеся", &["учащийся"]),
    ("учащихся", &["учащийся"]),
    ("питание", &["питание"]),
    ("питания", &["питание"]),
    ("питанию", &["питание"]),
    ("питанием", &["питание"]),
    ("образование", &["образование"]),
    ("образования", &["образование"]),
    ("образованию", &["образование"]),
    ("образованием", &["образование"]),
    ("турникет", &["турникет"]),
    ("турникета", &["турникет"]),
    ("турникеты", &["турникет"]),
    ("турникетов", &["турникет"]),
    // frequent catalog vocabulary
    ("очередь", &["очередь"]),
    ("очереди", &["очередь"]),
    ("очередью", &["очередь"]),
    ("запись", &["запись"]),
    ("записи", &["запись"]),
    ("записью", &["запись"]),
    ("учет", &["учет"]),
    ("учета", &["учет"]),
    ("учету", &["учет"]),
    ("детский", &["детский"]),
    ("детского", &["детский"]),
    ("детская", &["детский"]),
    ("детские", &["детский"]),
    ("детских", &["детский"]),
    ("зарплата", &["зарплата"]),
    ("зарплаты", &["зарплата"]),
    ("зарплате", &["зарплата"]),
];

/// Dictionary-backed [`Lemmatizer`].
///
/// The default table covers the domain vocabulary the synonym and stopword
/// sets are built around. It is intentionally small; tokens outside the
/// table simply degrade to their surface form downstream.
pub struct DictionaryLemmatizer {
    entries: HashMap<String, Vec<String>>,
}

impl DictionaryLemmatizer {
    /// Lemmatizer with the built-in domain dictionary.
    pub fn new() -> Self {
        Self::with_table(
            BUILTIN_DICTIONARY
                .iter()
                .map(|(surface, lemmas)| (*surface, *lemmas)),
        )
    }

    /// Lemmatizer over a caller-supplied table (used by tests and by
    /// deployments with their own dictionaries).
    pub fn with_table<'a, I>(table: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let entries = table
            .into_iter()
            .map(|(surface, lemmas)| {
                (
                    surface.to_string(),
                    lemmas.iter().map(|l| (*l).to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }
}

impl Default for DictionaryLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn primary_lemma(&self, token: &str) -> Option<String> {
        self.entries
            .get(token)
            .and_then(|lemmas| lemmas.first().cloned())
    }

    fn candidate_lemmas(&self, token: &str) -> Vec<String> {
        self.entries.get(token).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflected_forms_share_a_lemma() {
        let lemmatizer = DictionaryLemmatizer::new();
        for form in ["садик", "садику", "садиком", "садики"] {
            assert_eq!(lemmatizer.primary_lemma(form).as_deref(), Some("садик"));
        }
    }

    #[test]
    fn ambiguous_surface_yields_multiple_candidates() {
        let lemmatizer = DictionaryLemmatizer::new();
        let candidates = lemmatizer.candidate_lemmas("еду");
        assert_eq!(candidates, vec!["еда".to_string(), "ехать".to_string()]);
        // Primary is the most likely reading.
        assert_eq!(lemmatizer.primary_lemma("еду").as_deref(), Some("еда"));
    }

    #[test]
    fn unknown_token_has_no_analysis() {
        let lemmatizer = DictionaryLemmatizer::new();
        assert_eq!(lemmatizer.primary_lemma("микросервис"), None);
        assert!(lemmatizer.candidate_lemmas("микросервис").is_empty());
    }

    #[test]
    fn custom_table_overrides_builtin() {
        let lemmatizer = DictionaryLemmatizer::with_table([("кошки", &["кошка"] as &[&str])]);
        assert_eq!(lemmatizer.primary_lemma("кошки").as_deref(), Some("кошка"));
        assert_eq!(lemmatizer.primary_lemma("садику"), None);
    }
}
