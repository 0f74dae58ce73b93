//! Auto-Chain Advisor
//!
//! Proposes the next tool invocations from the shape of the previous result.
//! Rules fire independently and in a fixed order.

use super::stage::{
    has_field, CAREERS_FIELD, CAREER_ANALYSIS_FIELD, COST_BREAKDOWN_FIELD, CURRICULUM_FIELD,
    PROFILE_FIELD, TOTAL_COST_FIELD,
};
use super::types::{ChainSuggestion, Priority, Stage, ToolName};
use serde_json::{Map, Value};

/// Total cost above which scholarship search is suggested
pub const SCHOLARSHIP_THRESHOLD: f64 = 1000.0;

#[derive(Debug, Clone, Copy)]
pub struct ChainRules {
    pub scholarships_enabled: bool,
}

impl Default for ChainRules {
    fn default() -> Self {
        Self {
            scholarships_enabled: true,
        }
    }
}

pub fn suggest_next(
    result: &Map<String, Value>,
    stage: Stage,
    rules: ChainRules,
) -> Vec<ChainSuggestion> {
    let mut suggestions = Vec::new();

    if has_field(result, CAREERS_FIELD) && stage != Stage::LearningPlanned {
        suggestions.push(ChainSuggestion::new(
            "Create a learning curriculum for one of these careers",
            ToolName::GenerateCurriculum,
            Priority::High,
        ));
    }

    if has_field(result, CURRICULUM_FIELD)
        && !has_field(result, TOTAL_COST_FIELD)
        && !has_field(result, COST_BREAKDOWN_FIELD)
    {
        suggestions.push(ChainSuggestion::new(
            "Calculate what this learning path will cost",
            ToolName::CalculateCosts,
            Priority::Medium,
        ));
    }

    if has_field(result, PROFILE_FIELD) && !has_field(result, CAREER_ANALYSIS_FIELD) {
        suggestions.push(ChainSuggestion::new(
            "Get career recommendations based on your profile",
            ToolName::RecommendCareers,
            Priority::High,
        ));
    }

    let total_cost = result.get(TOTAL_COST_FIELD).and_then(Value::as_f64);
    if rules.scholarships_enabled && total_cost.is_some_and(|cost| cost > SCHOLARSHIP_THRESHOLD) {
        suggestions.push(ChainSuggestion::new(
            "Find scholarships to reduce your learning costs",
            ToolName::FindScholarships,
            Priority::Medium,
        ));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn suggest(value: Value, stage: Stage) -> Vec<ChainSuggestion> {
        let result = value.as_object().cloned().unwrap_or_default();
        suggest_next(&result, stage, ChainRules::default())
    }

    fn actions(suggestions: &[ChainSuggestion]) -> Vec<ToolName> {
        suggestions.iter().map(|s| s.action).collect()
    }

    #[test]
    fn test_expensive_plan_suggests_scholarships() {
        let suggestions = suggest(json!({"total_cost": 1500}), Stage::LearningPlanned);
        let scholarship = suggestions
            .iter()
            .find(|s| s.action == ToolName::FindScholarships)
            .expect("scholarship suggestion");
        assert_eq!(scholarship.priority, Priority::Medium);
    }

    #[test]
    fn test_cheap_plan_does_not_suggest_scholarships() {
        let suggestions = suggest(json!({"total_cost": 50}), Stage::LearningPlanned);
        assert!(!actions(&suggestions).contains(&ToolName::FindScholarships));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let suggestions = suggest(json!({"total_cost": 1000}), Stage::LearningPlanned);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_careers_suggest_curriculum_unless_planned() {
        let explored = suggest(json!({"recommended_careers": {}}), Stage::CareersExplored);
        assert_eq!(actions(&explored), vec![ToolName::GenerateCurriculum]);
        assert_eq!(explored[0].priority, Priority::High);

        let planned = suggest(json!({"recommended_careers": {}}), Stage::LearningPlanned);
        assert!(planned.is_empty());
    }

    #[test]
    fn test_curriculum_without_cost_suggests_costs() {
        let suggestions = suggest(json!({"curriculum": {}}), Stage::LearningPlanned);
        assert_eq!(actions(&suggestions), vec![ToolName::CalculateCosts]);

        let costed = suggest(json!({"curriculum": {}, "total_cost": 400}), Stage::LearningPlanned);
        assert!(costed.is_empty());
    }

    #[test]
    fn test_profile_without_analysis_suggests_careers() {
        let suggestions = suggest(json!({"profile": {"name": "Ana"}}), Stage::ProfileComplete);
        assert_eq!(actions(&suggestions), vec![ToolName::RecommendCareers]);

        let analysed = suggest(
            json!({"profile": {}, "career_analysis": {}}),
            Stage::ProfileComplete,
        );
        assert!(analysed.is_empty());
    }

    #[test]
    fn test_multiple_rules_fire_in_order() {
        let suggestions = suggest(
            json!({"recommended_careers": {}, "curriculum": {}, "profile": {}, "total_cost": 5000}),
            Stage::CareersExplored,
        );
        assert_eq!(
            actions(&suggestions),
            vec![
                ToolName::GenerateCurriculum,
                ToolName::RecommendCareers,
                ToolName::FindScholarships,
            ]
        );
    }

    #[test]
    fn test_scholarship_rule_respects_feature_flag() {
        let result = json!({"total_cost": 9000}).as_object().cloned().unwrap_or_default();
        let suggestions = suggest_next(
            &result,
            Stage::LearningPlanned,
            ChainRules {
                scholarships_enabled: false,
            },
        );
        assert!(suggestions.is_empty());
    }
}
