//! Skill-Gap Calculator
//!
//! Compares a free-text list of declared skills against the canonical skills
//! a career requires. Matching is case-insensitive and permissive: a required
//! skill matches when it contains a declared skill or is contained by one.

use super::types::{Readiness, SkillGapResult};

/// Split a comma-separated skill string into lower-case, non-empty tokens
pub fn tokenize_skills(current_skills: &str) -> Vec<String> {
    current_skills
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn calculate_gap<S: AsRef<str>>(current_skills: &str, required_skills: &[S]) -> SkillGapResult {
    let tokens = tokenize_skills(current_skills);
    let mut matching_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for required in required_skills {
        let required = required.as_ref();
        let needle = required.to_lowercase();
        let matched = tokens
            .iter()
            .any(|token| needle.contains(token.as_str()) || token.contains(needle.as_str()));

        if matched {
            matching_skills.push(required.to_string());
        } else {
            missing_skills.push(required.to_string());
        }
    }

    let gap_percentage = if required_skills.is_empty() {
        0.0
    } else {
        round_one_decimal(missing_skills.len() as f64 / required_skills.len() as f64 * 100.0)
    };

    SkillGapResult {
        matching_skills,
        missing_skills,
        gap_percentage,
        readiness: Readiness::from_gap(gap_percentage),
    }
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_match_is_medium() {
        let gap = calculate_gap("Python, SQL", &["Python", "SQL", "Docker"]);
        assert_eq!(gap.gap_percentage, 33.3);
        assert_eq!(gap.readiness, Readiness::Medium);
        assert_eq!(gap.matching_skills, vec!["Python", "SQL"]);
        assert_eq!(gap.missing_skills, vec!["Docker"]);
    }

    #[test]
    fn test_empty_inputs_have_no_gap() {
        let empty: [&str; 0] = [];
        let gap = calculate_gap("", &empty);
        assert_eq!(gap.gap_percentage, 0.0);
        assert_eq!(gap.readiness, Readiness::High);
        assert!(gap.matching_skills.is_empty());
        assert!(gap.missing_skills.is_empty());
    }

    #[test]
    fn test_no_declared_skills_misses_everything() {
        let gap = calculate_gap("  ,  ", &["Statistics", "Python"]);
        assert_eq!(gap.gap_percentage, 100.0);
        assert_eq!(gap.readiness, Readiness::Beginner);
    }

    #[test]
    fn test_substring_match_works_both_ways() {
        // "data analysis" contains "data"; "python 3" contains "python"
        let gap = calculate_gap("DATA, Python 3", &["Data Analysis", "Python", "Statistics"]);
        assert_eq!(gap.matching_skills, vec!["Data Analysis", "Python"]);
        assert_eq!(gap.gap_percentage, 33.3);
    }

    #[test]
    fn test_no_typo_tolerance() {
        let gap = calculate_gap("pyhton", &["Python"]);
        assert_eq!(gap.missing_skills, vec!["Python"]);
        assert_eq!(gap.readiness, Readiness::Beginner);
    }

    #[test]
    fn test_deterministic() {
        let required = ["Design Thinking", "User Research", "Prototyping"];
        let a = calculate_gap("Design, Research", &required);
        let b = calculate_gap("Design, Research", &required);
        assert_eq!(a, b);
        assert_eq!(a.gap_percentage, 33.3);
    }
}
