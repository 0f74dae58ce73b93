//! Workflow Stage Resolver
//!
//! Derives the next stage from the shape of a just-computed tool result, and
//! holds the table of regular transitions used to flag odd jumps.

use super::types::Stage;
use serde_json::{Map, Value};

// Result fields that carry meaning for staging and chaining
pub const PROFILE_FIELD: &str = "profile";
pub const CAREERS_FIELD: &str = "recommended_careers";
pub const CAREER_ANALYSIS_FIELD: &str = "career_analysis";
pub const CURRICULUM_FIELD: &str = "curriculum";
pub const PROGRESS_FIELD: &str = "progress";
pub const TOTAL_COST_FIELD: &str = "total_cost";
pub const COST_BREAKDOWN_FIELD: &str = "cost_breakdown";

/// Ordered shape rules; the first present field wins
const SHAPE_RULES: [(&str, Stage); 4] = [
    (PROFILE_FIELD, Stage::ProfileComplete),
    (CAREERS_FIELD, Stage::CareersExplored),
    (CURRICULUM_FIELD, Stage::LearningPlanned),
    (PROGRESS_FIELD, Stage::LearningActive),
];

/// A field counts as present when it exists and is not null
pub fn has_field(result: &Map<String, Value>, field: &str) -> bool {
    result.get(field).is_some_and(|v| !v.is_null())
}

/// Stage implied by a result, if any
pub fn stage_for_result(result: &Map<String, Value>) -> Option<Stage> {
    SHAPE_RULES
        .iter()
        .find(|(field, _)| has_field(result, field))
        .map(|(_, stage)| *stage)
}

/// Stage after applying a result; unchanged when no rule matches.
/// Regressions are not prevented here.
pub fn resolve_stage(current: Stage, result: &Map<String, Value>) -> Stage {
    stage_for_result(result).unwrap_or(current)
}

/// Stages that are a regular next step from `current`
pub fn allowed_next(current: Stage) -> &'static [Stage] {
    match current {
        Stage::New => &Stage::ALL,
        Stage::ProfileComplete => &[
            Stage::ProfileComplete,
            Stage::CareersExplored,
            Stage::LearningPlanned,
            Stage::LearningActive,
        ],
        Stage::CareersExplored => &[
            Stage::CareersExplored,
            Stage::LearningPlanned,
            Stage::LearningActive,
        ],
        Stage::LearningPlanned => &[Stage::LearningPlanned, Stage::LearningActive],
        Stage::LearningActive => &[Stage::LearningActive],
    }
}

pub fn is_regular_transition(from: Stage, to: Stage) -> bool {
    allowed_next(from).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_each_field_maps_to_its_stage() {
        assert_eq!(stage_for_result(&map(json!({"profile": {}}))), Some(Stage::ProfileComplete));
        assert_eq!(
            stage_for_result(&map(json!({"recommended_careers": {}}))),
            Some(Stage::CareersExplored)
        );
        assert_eq!(stage_for_result(&map(json!({"curriculum": {}}))), Some(Stage::LearningPlanned));
        assert_eq!(stage_for_result(&map(json!({"progress": {}}))), Some(Stage::LearningActive));
    }

    #[test]
    fn test_first_rule_wins() {
        let result = map(json!({"progress": {}, "curriculum": {}, "profile": {}}));
        assert_eq!(stage_for_result(&result), Some(Stage::ProfileComplete));
    }

    #[test]
    fn test_unmatched_result_keeps_stage() {
        let result = map(json!({"total_cost": 400, "profile": null}));
        assert_eq!(resolve_stage(Stage::CareersExplored, &result), Stage::CareersExplored);
    }

    #[test]
    fn test_curriculum_wins_regardless_of_prior_stage() {
        let result = map(json!({"curriculum": {"duration": "6 months"}}));
        for prior in Stage::ALL {
            assert_eq!(resolve_stage(prior, &result), Stage::LearningPlanned);
        }
    }

    #[test]
    fn test_whitelist_allows_forward_and_rejects_backward() {
        assert!(is_regular_transition(Stage::New, Stage::LearningActive));
        assert!(is_regular_transition(Stage::CareersExplored, Stage::CareersExplored));
        assert!(is_regular_transition(Stage::ProfileComplete, Stage::LearningPlanned));
        assert!(!is_regular_transition(Stage::LearningActive, Stage::LearningPlanned));
        assert!(!is_regular_transition(Stage::CareersExplored, Stage::ProfileComplete));
    }
}
