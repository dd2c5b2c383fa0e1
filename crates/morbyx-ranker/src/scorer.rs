//! Jaccard similarity scoring and candidate selection.

use std::collections::HashSet;

use morbyx_ingestion::SymptomIndex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::query::normalise_query;

/// Ranking policy for one `rank` call.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Maximum number of predictions returned.
    pub limit: usize,
    /// Scores must be strictly greater than this to be returned.
    pub min_score: f64,
    /// Populate `matched_symptoms` on each prediction.
    pub include_matched: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            min_score: 0.0,
            include_matched: false,
        }
    }
}

/// One ranked disease candidate. Transient, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: String,
    /// Jaccard similarity in (0, 1], rounded to 2 decimals.
    pub score: f64,
    /// Query ∩ profile, sorted; only present when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_symptoms: Option<Vec<String>>,
}

/// Jaccard similarity: |a ∩ b| / |a ∪ b|, defined as 0 when the union is
/// empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Round to 2 decimal digits. Applied before sorting and filtering, so the
/// ordering and the threshold both see the rounded value.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Rank every indexed disease against the raw query text.
///
/// Returns at most `limit` predictions with score strictly greater than
/// `min_score`, sorted non-increasing. Ties keep the index's first-seen
/// dataset order (stable sort), so repeated identical queries against an
/// unchanged index return identical results. An empty query set yields an
/// empty result.
pub fn rank(index: &SymptomIndex, raw_query: &str, opts: &RankOptions) -> Vec<Prediction> {
    let query = normalise_query(raw_query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<Prediction> = index
        .profiles()
        .iter()
        .map(|profile| {
            let score = round2(jaccard(&query, &profile.symptoms));
            let matched_symptoms = if opts.include_matched {
                let mut matched: Vec<String> = query
                    .intersection(&profile.symptoms)
                    .cloned()
                    .collect();
                matched.sort();
                Some(matched)
            } else {
                None
            };
            Prediction {
                disease: profile.name.clone(),
                score,
                matched_symptoms,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.retain(|p| p.score > opts.min_score);
    scored.truncate(opts.limit);

    debug!(
        query_terms = query.len(),
        candidates = scored.len(),
        "Ranked query against index"
    );
    scored
}
