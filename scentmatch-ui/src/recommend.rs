//! Recommendation scoring
//!
//! Scores every catalog row against one request in a single pass and keeps
//! the top five. The catalog is reloaded from the database on every request;
//! there is no cache to invalidate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::info;

use scentmatch_common::db::{load_fragrances, FragranceEntry};
use scentmatch_common::taxonomy::{expand_scent_prefs, personality_targets, NEUTRAL_ATTRIBUTE};

use crate::images::find_image;
use crate::AppState;

/// Fixed bonus for an attribute or fragrance-type match with the personality
const PROFILE_BONUS: u32 = 20;

/// Number of recommendations retained after ranking
const MAX_RESULTS: usize = 5;

/// Comment shown when a catalog row has none
const DEFAULT_COMMENT: &str = "暂无评论";

/// One ranked recommendation, ready for rendering
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub brand: String,
    pub name: String,
    pub frag_type: String,
    pub sig_note: String,
    pub attribute: String,
    pub comment: String,
    pub matched_notes: Vec<String>,
    pub score: u32,
    pub image_path: Option<String>,
}

/// Score the catalog against one request and keep the top five.
///
/// Additive scoring: each parsed note whose name appears in the expanded
/// target-note list contributes its percentage (one addition per occurrence,
/// no deduplication), and the personality grants a fixed bonus for a
/// matching attribute and another for a matching fragrance type. A gender
/// filter excludes entries whose attribute is neither the filter value nor
/// the neutral category. Entries scoring 0 never appear. The sort is stable,
/// so ties keep catalog order.
pub fn score_catalog(
    entries: &[FragranceEntry],
    scent_prefs: &[String],
    personality: &str,
    gender: Option<&str>,
) -> Vec<Recommendation> {
    let target_notes = expand_scent_prefs(scent_prefs);
    let (target_attributes, target_frag_types) = personality_targets(personality);

    let mut candidates = Vec::new();

    for entry in entries {
        let mut score = 0u32;
        let mut matched_notes = Vec::new();

        for (note, percent) in &entry.parsed_notes {
            if target_notes.iter().any(|target| target == note) {
                score += percent;
                matched_notes.push(note.clone());
            }
        }

        if target_attributes.contains(&entry.attribute.as_str()) {
            score += PROFILE_BONUS;
        }
        if target_frag_types.contains(&entry.frag_type.as_str()) {
            score += PROFILE_BONUS;
        }

        if let Some(gender) = gender {
            if entry.attribute != gender && entry.attribute != NEUTRAL_ATTRIBUTE {
                continue;
            }
        }

        if score == 0 {
            continue;
        }

        candidates.push(Recommendation {
            brand: entry.brand.clone(),
            name: entry.name.clone(),
            frag_type: entry.frag_type.clone(),
            sig_note: entry.sig_note.clone().unwrap_or_default(),
            attribute: entry.attribute.clone(),
            comment: entry
                .itemcomment1
                .clone()
                .unwrap_or_else(|| DEFAULT_COMMENT.to_string()),
            matched_notes,
            score,
            image_path: None,
        });
    }

    // Stable sort: ties retain catalog iteration order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(MAX_RESULTS);
    candidates
}

/// Load the catalog, score it, and resolve images for the retained entries
pub async fn recommend(
    state: &AppState,
    scent_prefs: &[String],
    personality: &str,
    gender: Option<&str>,
) -> Result<Vec<Recommendation>, RecommendError> {
    let entries = load_fragrances(&state.db)
        .await
        .map_err(|e| RecommendError::Catalog(e.to_string()))?;

    let mut recommendations = score_catalog(&entries, scent_prefs, personality, gender);

    for recommendation in &mut recommendations {
        recommendation.image_path = find_image(&state.image_root, &recommendation.name);
    }

    info!(
        "Scored {} catalog entries, kept {}",
        entries.len(),
        recommendations.len()
    );

    Ok(recommendations)
}

/// Recommendation errors
#[derive(Debug)]
pub enum RecommendError {
    Catalog(String),
}

impl IntoResponse for RecommendError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RecommendError::Catalog(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Catalog error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scentmatch_common::notes::parse_notes;

    fn entry(
        name: &str,
        frag_type: &str,
        sig_note: Option<&str>,
        attribute: &str,
        comment: Option<&str>,
    ) -> FragranceEntry {
        FragranceEntry {
            brand: "测试品牌".to_string(),
            name: name.to_string(),
            frag_type: frag_type.to_string(),
            sig_note: sig_note.map(|s| s.to_string()),
            attribute: attribute.to_string(),
            itemcomment1: comment.map(|s| s.to_string()),
            parsed_notes: parse_notes(sig_note),
        }
    }

    #[test]
    fn test_note_attribute_and_frag_type_all_add_up() {
        let catalog = vec![entry(
            "晨光",
            "木质东方调",
            Some("橙子(40%)"),
            "男香",
            None,
        )];

        let results = score_catalog(
            &catalog,
            &["Citrus 柑橘".to_string()],
            "Confident 自信",
            None,
        );

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 80); // 40 note + 20 attribute + 20 frag_type
        assert_eq!(results[0].matched_notes, vec!["橙子".to_string()]);
        assert_eq!(results[0].comment, "暂无评论");
    }

    #[test]
    fn test_each_matching_occurrence_counts() {
        let catalog = vec![entry(
            "重瓣",
            "花香调",
            Some("玫瑰(30%) 玫瑰(10%)"),
            "中性香",
            None,
        )];

        let results = score_catalog(&catalog, &["Floral 花香".to_string()], "Mystery", None);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 40);
        assert_eq!(
            results[0].matched_notes,
            vec!["玫瑰".to_string(), "玫瑰".to_string()]
        );
    }

    #[test]
    fn test_unknown_personality_grants_no_bonus() {
        let catalog = vec![entry(
            "晨光",
            "木质东方调",
            Some("橙子(40%)"),
            "男香",
            None,
        )];

        let results = score_catalog(&catalog, &["Citrus 柑橘".to_string()], "Mystery", None);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 40); // note percentage only
    }

    #[test]
    fn test_zero_score_entries_are_excluded() {
        let catalog = vec![entry("夜影", "花香调", Some("玫瑰(30%)"), "女香", None)];

        // Citrus preferences never match a rose note, and the Confident
        // profile accepts neither 女香 nor 花香调
        let results = score_catalog(
            &catalog,
            &["Citrus 柑橘".to_string()],
            "Confident 自信",
            None,
        );

        assert!(results.is_empty());
    }

    #[test]
    fn test_gender_filter_excludes_mismatched_attribute() {
        let catalog = vec![
            entry("夜影", "花香调", Some("玫瑰(90%)"), "女香", None),
            entry("晨光", "木质东方调", Some("玫瑰(10%)"), "男香", None),
            entry("白雾", "芳香调", Some("玫瑰(5%)"), "中性香", None),
        ];

        let results = score_catalog(
            &catalog,
            &["Floral 花香".to_string()],
            "Mystery",
            Some("男香"),
        );

        // 女香 is excluded even though it has the highest score;
        // the neutral category always passes the filter
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["晨光", "白雾"]);
    }

    #[test]
    fn test_results_sorted_descending_and_truncated_to_five() {
        let catalog = vec![
            entry("一号", "花香调", Some("玫瑰(10%)"), "中性香", None),
            entry("二号", "花香调", Some("玫瑰(60%)"), "中性香", None),
            entry("三号", "花香调", Some("玫瑰(30%)"), "中性香", None),
            entry("四号", "花香调", Some("玫瑰(50%)"), "中性香", None),
            entry("五号", "花香调", Some("玫瑰(20%)"), "中性香", None),
            entry("六号", "花香调", Some("玫瑰(40%)"), "中性香", None),
        ];

        let results = score_catalog(&catalog, &["Floral 花香".to_string()], "Mystery", None);

        assert_eq!(results.len(), 5);
        let scores: Vec<u32> = results.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![60, 50, 40, 30, 20]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            entry("先到", "花香调", Some("玫瑰(30%)"), "中性香", None),
            entry("后到", "花香调", Some("玫瑰(30%)"), "中性香", None),
        ];

        let results = score_catalog(&catalog, &["Floral 花香".to_string()], "Mystery", None);

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["先到", "后到"]);
    }

    #[test]
    fn test_unknown_scent_label_matches_as_note_name() {
        let catalog = vec![entry("浮游", "水生调", Some("海洋调(35%)"), "中性香", None)];

        // The free-form label passes through verbatim and matches the note
        let results = score_catalog(&catalog, &["海洋调".to_string()], "Mystery", None);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 35);
    }

    #[test]
    fn test_stored_comment_is_kept() {
        let catalog = vec![entry(
            "晨光",
            "木质东方调",
            Some("橙子(40%)"),
            "男香",
            Some("清爽耐闻"),
        )];

        let results = score_catalog(&catalog, &["Citrus 柑橘".to_string()], "Mystery", None);

        assert_eq!(results[0].comment, "清爽耐闻");
    }
}
