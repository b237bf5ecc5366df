//! Token-set fuzzy similarity.
//!
//! The scorer needs a metric that is robust to word reordering and to one
//! side being a vocabulary superset of the other (a two-word query against
//! a paragraph of wiki content). The classic "token set ratio" does both:
//! compare the sorted token intersection against each side's full sorted
//! reconstruction and keep the best normalized edit similarity.

use std::collections::BTreeSet;

/// Order-insensitive fuzzy similarity of two word sequences, in [0, 100].
///
/// Tokenizes both inputs into distinct word sets, then takes the maximum
/// normalized Levenshtein similarity across three comparison pairs built
/// from the sorted intersection and symmetric differences. When one side's
/// vocabulary contains the other's, the score is exactly 100.
///
/// Either side tokenizing to nothing yields 0.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let set_a: BTreeSet<&str> = a.split_whitespace().collect();
    let set_b: BTreeSet<&str> = b.split_whitespace().collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    // BTreeSet iteration order is sorted, so the joined strings are
    // deterministic regardless of input word order.
    let intersection: Vec<&str> = set_a.intersection(&set_b).copied().collect();
    let only_a: Vec<&str> = set_a.difference(&set_b).copied().collect();
    let only_b: Vec<&str> = set_b.difference(&set_a).copied().collect();

    let base = intersection.join(" ");
    let full_a = join_parts(&base, &only_a.join(" "));
    let full_b = join_parts(&base, &only_b.join(" "));

    [(&base, &full_a), (&base, &full_b), (&full_a, &full_b)]
        .into_iter()
        .map(|(x, y)| strsim::normalized_levenshtein(x, y) * 100.0)
        .fold(0.0, f64::max)
}

fn join_parts(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{head} {tail}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_token_sets_score_100() {
        assert_eq!(token_set_ratio("доу дошкольное", "доу дошкольное"), 100.0);
    }

    #[test]
    fn word_order_is_irrelevant() {
        assert_eq!(
            token_set_ratio("питание школа учет", "учет школа питание"),
            100.0
        );
    }

    #[test]
    fn vocabulary_subset_scores_100() {
        // Query tokens fully contained in the record's vocabulary.
        assert_eq!(
            token_set_ratio("доу дошкольное", "электронный доу дошкольное образование"),
            100.0
        );
    }

    #[test]
    fn duplicate_tokens_collapse() {
        assert_eq!(token_set_ratio("сад сад сад", "сад"), 100.0);
    }

    #[test]
    fn disjoint_vocabularies_score_low() {
        let score = token_set_ratio("доу дошкольное", "зарплата бухгалтерия");
        assert!(score < 45.0, "got {score}");
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(token_set_ratio("", "доу"), 0.0);
        assert_eq!(token_set_ratio("доу", ""), 0.0);
        assert_eq!(token_set_ratio("", ""), 0.0);
        assert_eq!(token_set_ratio("   ", "доу"), 0.0);
    }

    #[test]
    fn near_miss_tokens_score_between_bounds() {
        let score = token_set_ratio("дошкольное", "дошкольный");
        assert!(score > 50.0 && score < 100.0, "got {score}");
    }
}
