//! End-to-end relevance tests over a real `SQLite` corpus.
//!
//! Seeds a temp catalog the way the ETL side would, then drives the full
//! pipeline: normalization, synonym expansion, fuzzy scoring, threshold,
//! ranking, limit.

use std::sync::Arc;

use catalog_search::config::SearchConfig;
use catalog_search::model::types::SystemRecord;
use catalog_search::search::engine::SearchEngine;
use catalog_search::search::lemma::DictionaryLemmatizer;
use catalog_search::storage::sqlite::SqliteCatalog;
use tempfile::TempDir;

fn seed(catalog: &SqliteCatalog, records: &[SystemRecord]) {
    for record in records {
        catalog.insert_record(record).expect("insert fixture record");
    }
}

fn engine_over(dir: &TempDir, records: &[SystemRecord]) -> SearchEngine {
    let catalog = SqliteCatalog::open_or_create(&dir.path().join("systems_kb.db"))
        .expect("create catalog");
    seed(&catalog, records);
    SearchEngine::new(
        Box::new(catalog),
        Arc::new(DictionaryLemmatizer::new()),
        SearchConfig::default(),
    )
}

fn preschool_record() -> SystemRecord {
    SystemRecord {
        product_name: Some("Реестр ДОУ дошкольное образование".to_string()),
        product_code: Some("SYS-014".to_string()),
        status: Some("В промышленной эксплуатации".to_string()),
        description: Some("Учет заявлений и зачисление детей".to_string()),
        ..SystemRecord::default()
    }
}

fn payroll_record() -> SystemRecord {
    SystemRecord {
        product_name: Some("Расчет заработной платы".to_string()),
        product_code: Some("SYS-002".to_string()),
        status: Some("В промышленной эксплуатации".to_string()),
        description: Some("Начисление зарплаты сотрудникам".to_string()),
        ..SystemRecord::default()
    }
}

#[test]
fn colloquial_kindergarten_query_finds_canonical_record() {
    let dir = TempDir::new().unwrap();
    let engine = engine_over(&dir, &[payroll_record(), preschool_record()]);

    // "садик" shares no literal token with either record; only synonym
    // expansion can bridge it.
    let hits = engine.search("садик", 5).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].record.product_name.as_deref(),
        Some("Реестр ДОУ дошкольное образование")
    );
    assert!(hits[0].search_score > 45.0);
}

#[test]
fn unrelated_domain_stays_below_threshold() {
    let dir = TempDir::new().unwrap();
    let engine = engine_over(&dir, &[payroll_record()]);

    let hits = engine.search("садик", 5).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn inflected_query_matches_via_lemmatization() {
    let dir = TempDir::new().unwrap();
    let mut record = SystemRecord {
        product_name: Some("Пропуск ученика".to_string()),
        ..SystemRecord::default()
    };
    record.description = Some("Контроль прохода учеников через турникеты".to_string());
    let engine = engine_over(&dir, &[record]);

    // Different case/number than the stored text.
    let hits = engine.search("ученики проходы", 5).unwrap();
    assert_eq!(hits.len(), 1);
}

#[test]
fn enrichment_channels_lift_a_weak_base_match() {
    // Name and description share no vocabulary with the query; only the
    // AI-keyword and wiki channels (both matched via synonym expansion of
    // "еда" -> "питание") can push the record over the threshold.
    let enriched = SystemRecord {
        product_name: Some("Меню столовой".to_string()),
        description: Some("Публикация меню".to_string()),
        ai_keywords: Some("еда питание обеды".to_string()),
        wiki_content: Some("питание школьников организация обедов".to_string()),
        status: Some("prod".to_string()),
        ..SystemRecord::default()
    };
    let bare = SystemRecord {
        product_name: Some("Меню столовой".to_string()),
        description: Some("Публикация меню".to_string()),
        ..SystemRecord::default()
    };

    let dir = TempDir::new().unwrap();
    let dir2 = TempDir::new().unwrap();
    let engine = engine_over(&dir, &[enriched]);
    let engine_bare = engine_over(&dir2, &[bare]);

    let with_enrichment = engine.search("еда", 5).unwrap();
    assert_eq!(with_enrichment.len(), 1);
    assert!(with_enrichment[0].search_score > 45.0);

    let without_enrichment = engine_bare.search("еда", 5).unwrap();
    assert!(without_enrichment.is_empty());
}

#[test]
fn empty_query_returns_empty_regardless_of_corpus() {
    let dir = TempDir::new().unwrap();
    let engine = engine_over(&dir, &[preschool_record(), payroll_record()]);

    assert!(engine.search("", 5).unwrap().is_empty());
    assert!(engine.search("   ", 50).unwrap().is_empty());
}

#[test]
fn limit_truncates_ranked_results() {
    let dir = TempDir::new().unwrap();
    let mut records = Vec::new();
    for i in 0..10 {
        let mut record = preschool_record();
        // Vary the score via the wiki channel on half the corpus.
        if i % 2 == 0 {
            record.wiki_content = Some("доу дошкольное зачисление".to_string());
        }
        records.push(record);
    }
    let engine = engine_over(&dir, &records);

    let hits = engine.search("садик", 3).unwrap();
    assert_eq!(hits.len(), 3);
    assert!(hits[0].search_score >= hits[1].search_score);
    assert!(hits[1].search_score >= hits[2].search_score);
    // The wiki-enriched records outrank the plain ones.
    assert!(hits[0].record.wiki_content.is_some());
}
