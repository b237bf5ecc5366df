//! Engine tunables.
//!
//! The filter threshold, status bonus, and fusion weights are empirical
//! constants inherited from the production deployment. They are exposed as
//! named config values (deserializable from TOML) rather than baked-in
//! literals so operators can retune them per deployment.

use serde::{Deserialize, Serialize};

/// Default number of results returned when the caller does not ask for more.
pub const DEFAULT_LIMIT: usize = 5;

/// Upper bound enforced on caller-supplied limits at the CLI boundary.
pub const MAX_LIMIT: usize = 50;

/// Tunable parameters of the relevance engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Records scoring at or below this value are dropped (strict `>`).
    pub score_threshold: f64,
    /// Flat bonus added when the record status matches an active marker.
    pub status_bonus: f64,
    /// Weight of the name/description channel in the fused score.
    pub base_weight: f64,
    /// Weight of the AI-keyword channel.
    pub ai_weight: f64,
    /// Weight of the wiki-content channel.
    pub wiki_weight: f64,
    /// Lowercase substrings that mark a status as "in production".
    pub active_status_markers: Vec<String>,
    /// Result count used when the caller passes no explicit limit.
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            score_threshold: 45.0,
            status_bonus: 5.0,
            base_weight: 0.5,
            ai_weight: 0.3,
            wiki_weight: 0.2,
            active_status_markers: vec!["эксплуатаци".to_string(), "prod".to_string()],
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchConfig {
    /// True when `status` (already lowercased) indicates an active deployment.
    pub fn status_is_active(&self, status: &str) -> bool {
        self.active_status_markers
            .iter()
            .any(|marker| status.contains(marker.as_str()))
    }
}
