//! Career Advisor Types
//!
//! Core data structures shared by the session store, the workflow staging
//! components and the domain tools.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================
// WORKFLOW STAGE
// ============================================================

/// Coarse label for how far a user has come through the advisory workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    #[default]
    New,
    ProfileComplete,
    CareersExplored,
    LearningPlanned,
    LearningActive,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::New,
        Stage::ProfileComplete,
        Stage::CareersExplored,
        Stage::LearningPlanned,
        Stage::LearningActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::New => "NEW",
            Stage::ProfileComplete => "PROFILE_COMPLETE",
            Stage::CareersExplored => "CAREERS_EXPLORED",
            Stage::LearningPlanned => "LEARNING_PLANNED",
            Stage::LearningActive => "LEARNING_ACTIVE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Stage::ALL.iter().copied().find(|stage| stage.as_str() == s)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// USER PROFILE & PROGRESS
// ============================================================

/// Profile collected at the start of a journey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub current_role: String,
    pub experience_years: u32,
    pub interests: Vec<String>,
    /// "visual", "auditory", "hands-on", "reading"
    pub learning_style: String,
    /// Daily time budget, e.g. "2-3 hours daily"
    pub time_availability: String,
    /// Creation date, YYYY-MM-DD
    pub profile_created: String,
}

impl UserProfile {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            current_role: "student".to_string(),
            experience_years: 0,
            interests: Vec::new(),
            learning_style: "visual".to_string(),
            time_availability: "2-3 hours daily".to_string(),
            profile_created: Utc::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Latest learning progress reported for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub completed_skills: Vec<String>,
    /// 0.0 to 100.0, one decimal
    pub percentage: f64,
    pub badges: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================
// SKILL GAP
// ============================================================

/// Qualitative bucket for a skill-gap percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readiness {
    High,
    Medium,
    Beginner,
}

impl Readiness {
    pub fn from_gap(gap_percentage: f64) -> Self {
        if gap_percentage < 30.0 {
            Readiness::High
        } else if gap_percentage < 60.0 {
            Readiness::Medium
        } else {
            Readiness::Beginner
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapResult {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub gap_percentage: f64,
    pub readiness: Readiness,
}

// ============================================================
// TOOLS
// ============================================================

/// Every tool the dispatch layer can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    StartJourney,
    ManageState,
    CollectProfile,
    AnalyzeSkills,
    RecommendCareers,
    GenerateCurriculum,
    TrackProgress,
    CalculateCosts,
    FindScholarships,
}

impl ToolName {
    pub const ALL: [ToolName; 9] = [
        ToolName::StartJourney,
        ToolName::ManageState,
        ToolName::CollectProfile,
        ToolName::AnalyzeSkills,
        ToolName::RecommendCareers,
        ToolName::GenerateCurriculum,
        ToolName::TrackProgress,
        ToolName::CalculateCosts,
        ToolName::FindScholarships,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::StartJourney => "start_journey",
            ToolName::ManageState => "manage_state",
            ToolName::CollectProfile => "collect_profile",
            ToolName::AnalyzeSkills => "analyze_skills",
            ToolName::RecommendCareers => "recommend_careers",
            ToolName::GenerateCurriculum => "generate_curriculum",
            ToolName::TrackProgress => "track_progress",
            ToolName::CalculateCosts => "calculate_costs",
            ToolName::FindScholarships => "find_scholarships",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        ToolName::ALL.iter().copied().find(|tool| tool.as_str() == s)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// A proposed follow-up tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSuggestion {
    /// Short prompt shown to the user
    pub prompt: String,
    pub action: ToolName,
    pub priority: Priority,
}

impl ChainSuggestion {
    pub fn new(prompt: &str, action: ToolName, priority: Priority) -> Self {
        Self {
            prompt: prompt.to_string(),
            action,
            priority,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Structured record returned to the dispatch layer for every tool call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub status: Status,
    pub message: String,
    pub user_id: String,
    /// Stage after the call; absent on error results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_count: Option<u64>,
    pub suggestions: Vec<ChainSuggestion>,
    /// Tool-specific fields, flattened into the record
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl ToolResult {
    /// Static follow-ups offered whenever a tool fails
    pub fn fallback_suggestions() -> Vec<ChainSuggestion> {
        vec![
            ChainSuggestion::new(
                "Start a fresh career journey",
                ToolName::StartJourney,
                Priority::Medium,
            ),
            ChainSuggestion::new(
                "Explore career options",
                ToolName::RecommendCareers,
                Priority::Medium,
            ),
        ]
    }

    pub fn error(user_id: &str, message: &str) -> Self {
        Self {
            status: Status::Error,
            message: message.to_string(),
            user_id: user_id.to_string(),
            stage: None,
            interaction_count: None,
            suggestions: Self::fallback_suggestions(),
            data: Map::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}
