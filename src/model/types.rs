//! Catalog entity structs.

use serde::{Deserialize, Serialize};

/// A single software-system record from the catalog.
///
/// Every descriptive field is optional: the upstream CSV/wiki ETL leaves
/// holes, and the engine treats a missing field as an empty string rather
/// than an error. The struct is immutable for the duration of a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemRecord {
    pub id: i64,
    pub product_name: Option<String>,
    pub product_code: Option<String>,
    /// Free-text deployment status, e.g. "в промышленной эксплуатации".
    pub status: Option<String>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_telegram: Option<String>,
    pub description: Option<String>,
    pub wiki_url: Option<String>,
    pub jira_url: Option<String>,
    pub repo_url: Option<String>,
    /// Imported wiki page body; possibly large, possibly empty.
    pub wiki_content: Option<String>,
    /// AI-derived keyword string produced by the enrichment pipeline.
    pub ai_keywords: Option<String>,
    /// Epoch milliseconds of the last ETL update.
    pub last_updated: Option<i64>,
}

/// A scored record, produced only as a search return value.
///
/// Serializes flat (record fields plus `search_score`), matching the shape
/// consumers of the search endpoint expect. The score is guaranteed finite
/// by the scorer before a result is ever constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub record: SystemRecord,
    pub search_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_serializes_flat() {
        let result = SearchResult {
            record: SystemRecord {
                id: 7,
                product_name: Some("АИС Контингент".into()),
                ..SystemRecord::default()
            },
            search_score: 72.5,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["product_name"], "АИС Контингент");
        assert_eq!(json["search_score"], 72.5);
        // Absent fields serialize as explicit nulls, never NaN.
        assert!(json["owner_email"].is_null());
    }
}
