//! Domain Tools
//!
//! The callable tools exposed to the language-model agent and the HTTP layer.
//! Every tool call follows the same loop:
//!
//! 1. record one interaction for the user
//! 2. compute the result from the knowledge base (skill gap / motivation as needed)
//! 3. resolve the workflow stage from the shape of the result and store it
//! 4. attach auto-chain suggestions
//!
//! `CareerAdvisor::dispatch` is the error boundary: whatever goes wrong comes
//! back as a `status: "error"` result, never as an `Err`.

use super::chain::{self, ChainRules};
use super::knowledge::{KnowledgeBase, Scholarship};
use super::motivation;
use super::session::SessionStore;
use super::skill_gap::{self, round_one_decimal};
use super::stage;
use super::types::{ProgressSnapshot, Status, ToolName, ToolResult, UserProfile};
use crate::config::{AdvisorConfig, FeatureFlags};
use crate::error::{AdvisorError, AdvisorResult};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;

// ============================================================
// TOOL ARGUMENTS
// ============================================================

fn default_role() -> String {
    "student".to_string()
}

fn default_learning_style() -> String {
    "visual".to_string()
}

fn default_time_budget() -> String {
    "2-3 hours daily".to_string()
}

fn default_experience_level() -> String {
    "beginner".to_string()
}

fn default_learning_resources() -> String {
    "online courses".to_string()
}

fn default_background() -> String {
    "general".to_string()
}

fn default_phase() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartJourneyArgs {
    pub user_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManageStateArgs {
    pub action: String,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileArgs {
    pub name: String,
    #[serde(default = "default_role")]
    pub current_role: String,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub interests: String,
    #[serde(default = "default_learning_style")]
    pub learning_style: String,
    #[serde(default = "default_time_budget")]
    pub time_availability: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeSkillsArgs {
    pub resume_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendArgs {
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub current_skills: String,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurriculumArgs {
    pub target_career: String,
    #[serde(default)]
    pub current_skills: String,
    #[serde(default = "default_time_budget")]
    pub time_commitment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgressArgs {
    pub user_name: String,
    #[serde(default)]
    pub completed_skills: String,
    #[serde(default = "default_phase")]
    pub current_phase: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CostArgs {
    pub target_career: String,
    #[serde(default = "default_learning_resources")]
    pub learning_resources: String,
    #[serde(default = "default_time_budget")]
    pub time_commitment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScholarshipArgs {
    pub target_career: String,
    #[serde(default = "default_background")]
    pub user_background: String,
}

fn parse_args<T: DeserializeOwned>(args: Value) -> AdvisorResult<T> {
    // a bare `null` body is treated as "no arguments"
    let args = if args.is_null() { json!({}) } else { args };
    Ok(serde_json::from_value(args)?)
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

// ============================================================
// STATIC TOOL DATA
// ============================================================

/// Skills recognised in free-text resumes
const SKILL_VOCABULARY: [&str; 11] = [
    "python",
    "javascript",
    "react",
    "sql",
    "data analysis",
    "machine learning",
    "project management",
    "communication",
    "leadership",
    "problem solving",
    "teamwork",
];

/// Skills assumed for a complete learning path
const PROGRESS_TARGET_SKILLS: usize = 15;

const BADGES: [(usize, &str); 4] = [
    (3, "Quick Starter"),
    (6, "Knowledge Builder"),
    (10, "Skill Master"),
    (15, "Career Ready"),
];

/// Study pace multiplier applied to the standard duration
fn pace_multiplier(time_commitment: &str) -> f64 {
    match time_commitment {
        "1-2 hours daily" => 1.5,
        "2-3 hours daily" => 1.0,
        "3-4 hours daily" => 0.8,
        "4+ hours daily" => 0.6,
        _ => 1.0,
    }
}

const WEEKS_PER_MONTH: f64 = 4.3;

/// "$12,000" style formatting
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${}", out)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

// ============================================================
// CAREER ADVISOR
// ============================================================

pub struct CareerAdvisor {
    sessions: SessionStore,
    knowledge: KnowledgeBase,
    features: FeatureFlags,
    default_user_id: String,
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl CareerAdvisor {
    pub fn new(config: &AdvisorConfig) -> AdvisorResult<Self> {
        let rng: Box<dyn RngCore + Send> = match config.rng_seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        };
        Self::with_rng(config, rng)
    }

    /// Build with a caller-supplied randomness source
    pub fn with_rng(config: &AdvisorConfig, rng: Box<dyn RngCore + Send>) -> AdvisorResult<Self> {
        Ok(Self {
            sessions: SessionStore::new(config.transition_policy)?,
            knowledge: KnowledgeBase::builtin(),
            features: config.features,
            default_user_id: config.default_user_id.clone(),
            rng: Mutex::new(rng),
        })
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn features(&self) -> FeatureFlags {
        self.features
    }

    /// Caller-supplied id, or the sentinel when missing or blank
    pub fn resolve_user_id<'a>(&'a self, user_id: Option<&'a str>) -> &'a str {
        match user_id.map(str::trim) {
            Some(id) if !id.is_empty() => id,
            _ => &self.default_user_id,
        }
    }

    /// Run a tool by name with JSON arguments
    pub fn dispatch(&self, tool: &str, user_id: Option<&str>, args: Value) -> ToolResult {
        let user_id = self.resolve_user_id(user_id).to_string();
        log::info!("[tools] {} invoked for {}", tool, user_id);

        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| self.try_dispatch(tool, &user_id, args)));

        match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                log::warn!("[tools] {} failed for {}: {}", tool, user_id, e);
                ToolResult::error(&user_id, &e.to_string())
            }
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                log::error!("[tools] {} panicked for {}: {}", tool, user_id, reason);
                ToolResult::error(&user_id, &format!("Internal error while running {}", tool))
            }
        }
    }

    fn try_dispatch(&self, tool: &str, user_id: &str, args: Value) -> AdvisorResult<ToolResult> {
        let tool =
            ToolName::from_str(tool).ok_or_else(|| AdvisorError::UnknownTool(tool.to_string()))?;

        match tool {
            ToolName::StartJourney => Ok(self.start_journey(user_id, parse_args(args)?)),
            ToolName::ManageState => self.manage_state(user_id, parse_args(args)?),
            ToolName::CollectProfile => Ok(self.collect_profile(user_id, parse_args(args)?)),
            ToolName::AnalyzeSkills => Ok(self.analyze_skills(user_id, parse_args(args)?)),
            ToolName::RecommendCareers => Ok(self.recommend_careers(user_id, parse_args(args)?)),
            ToolName::GenerateCurriculum => {
                Ok(self.generate_curriculum(user_id, parse_args(args)?))
            }
            ToolName::TrackProgress => Ok(self.track_progress(user_id, parse_args(args)?)),
            ToolName::CalculateCosts => Ok(self.calculate_costs(user_id, parse_args(args)?)),
            ToolName::FindScholarships => self.find_scholarships(user_id, parse_args(args)?),
        }
    }

    fn motivation(&self, interaction_count: u64) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        motivation::motivational_message(interaction_count, &mut **rng)
    }

    /// Stage resolution + auto-chain, shared by every domain tool
    fn complete(
        &self,
        user_id: &str,
        interaction_count: u64,
        message: String,
        data: Map<String, Value>,
    ) -> ToolResult {
        let current = self.sessions.get(user_id).stage;
        let target = stage::resolve_stage(current, &data);

        let stage = if target == current {
            current
        } else {
            match self.sessions.set_stage(user_id, target) {
                Ok(change) => change.to,
                Err(e) => {
                    log::warn!("[tools] Keeping stage {} for {}: {}", current, user_id, e);
                    current
                }
            }
        };

        let suggestions = if self.features.enable_auto_chain {
            chain::suggest_next(
                &data,
                stage,
                ChainRules {
                    scholarships_enabled: self.features.enable_scholarships,
                },
            )
        } else {
            Vec::new()
        };

        ToolResult {
            status: Status::Success,
            message,
            user_id: user_id.to_string(),
            stage: Some(stage),
            interaction_count: Some(interaction_count),
            suggestions,
            data,
        }
    }

    // ------------------------------------------------------------
    // Session state
    // ------------------------------------------------------------

    pub fn manage_state(&self, user_id: &str, args: ManageStateArgs) -> AdvisorResult<ToolResult> {
        let outcome = self.sessions.apply_action(&args.action, user_id, &args.data)?;
        let session = self.sessions.get(user_id);

        Ok(ToolResult {
            status: Status::Success,
            message: outcome.message,
            user_id: user_id.to_string(),
            stage: Some(session.stage),
            interaction_count: Some(session.interaction_count),
            suggestions: Vec::new(),
            data: outcome.fields,
        })
    }

    // ------------------------------------------------------------
    // Onboarding & profiling
    // ------------------------------------------------------------

    pub fn start_journey(&self, user_id: &str, args: StartJourneyArgs) -> ToolResult {
        let count = self.sessions.record_tool_call(user_id, ToolName::StartJourney);

        let welcome_message = format!(
            "Welcome, {}! I'm your career advisor. I can assess your skills and interests, \
             recommend careers with market data, build a learning plan with real courses, \
             track your progress and help you budget for it. Are you a student exploring \
             options, a professional looking to upskill, or changing careers?",
            args.user_name
        );

        let data = into_object(json!({
            "welcome_message": welcome_message,
            "next_steps": [
                "Share your background and current situation",
                "Tell me about your interests and passions",
                "Let me know your learning preferences",
                "Describe your career goals and timeline",
            ],
            "conversation_started": true,
        }));

        let message = format!("Career journey started for {}", args.user_name);
        self.complete(user_id, count, message, data)
    }

    pub fn collect_profile(&self, user_id: &str, args: ProfileArgs) -> ToolResult {
        let count = self.sessions.record_tool_call(user_id, ToolName::CollectProfile);

        let profile = UserProfile {
            interests: args
                .interests
                .split(',')
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect(),
            current_role: args.current_role,
            experience_years: args.experience_years,
            learning_style: args.learning_style,
            time_availability: args.time_availability,
            ..UserProfile::new(&args.name)
        };
        self.sessions.set_profile(user_id, profile.clone());

        let message = format!("Profile created successfully for {}!", profile.name);
        let data = into_object(json!({ (stage::PROFILE_FIELD): profile }));
        self.complete(user_id, count, message, data)
    }

    pub fn analyze_skills(&self, user_id: &str, args: AnalyzeSkillsArgs) -> ToolResult {
        let count = self.sessions.record_tool_call(user_id, ToolName::AnalyzeSkills);

        let resume = args.resume_text.to_lowercase();
        let found: Vec<&str> = SKILL_VOCABULARY
            .iter()
            .copied()
            .filter(|skill| resume.contains(skill))
            .collect();

        let data = into_object(json!({
            "current_skills": found,
            "skill_count": found.len(),
            "recommendations": "Consider highlighting these skills in your career transition",
            "next_step": "Let's identify career paths that match your skills!",
        }));

        self.complete(user_id, count, format!("Found {} skills in your resume", found.len()), data)
    }

    // ------------------------------------------------------------
    // Careers & curriculum
    // ------------------------------------------------------------

    pub fn recommend_careers(&self, user_id: &str, args: RecommendArgs) -> ToolResult {
        let count = self.sessions.record_tool_call(user_id, ToolName::RecommendCareers);

        // fall back to the stored profile when the caller gives no interests
        let interests = if args.interests.trim().is_empty() {
            self.sessions
                .get(user_id)
                .profile
                .map(|p| p.interests.join(", "))
                .unwrap_or_default()
        } else {
            args.interests
        };

        let careers = self.knowledge.careers_for_interests(&interests);
        let mut recommended = Map::new();
        let mut analysis = Map::new();
        let mut best_match: Option<(&str, f64)> = None;

        for career in &careers {
            let mut entry = json!({
                "required_skills": career.required_skills,
                "time_to_proficiency": career.time_to_proficiency,
            });
            if self.features.enable_market_data {
                entry["avg_salary"] = json!(career.avg_salary);
                entry["job_growth"] = json!(career.job_growth);
            }
            recommended.insert(career.name.clone(), entry);

            let gap = skill_gap::calculate_gap(&args.current_skills, &career.required_skills);
            if best_match.map_or(true, |(_, best)| gap.gap_percentage < best) {
                best_match = Some((career.name.as_str(), gap.gap_percentage));
            }
            analysis.insert(career.name.clone(), json!(gap));
        }

        let mut data = Map::new();
        data.insert("total_options".to_string(), json!(recommended.len()));
        data.insert("experience_level".to_string(), json!(args.experience_level));
        if !skill_gap::tokenize_skills(&args.current_skills).is_empty() {
            data.insert("best_match".to_string(), json!(best_match.map(|(name, _)| name)));
        }
        data.insert(stage::CAREERS_FIELD.to_string(), Value::Object(recommended));
        data.insert(stage::CAREER_ANALYSIS_FIELD.to_string(), Value::Object(analysis));

        self.complete(
            user_id,
            count,
            "Here are career paths that match your interests!".to_string(),
            data,
        )
    }

    pub fn generate_curriculum(&self, user_id: &str, args: CurriculumArgs) -> ToolResult {
        let count = self.sessions.record_tool_call(user_id, ToolName::GenerateCurriculum);
        let career = args.target_career.trim();

        let curriculum = self.knowledge.curriculum(career).cloned().unwrap_or_else(|e| {
            log::debug!("[tools] {}; using the foundation curriculum", e);
            KnowledgeBase::default_curriculum()
        });

        let required_skills = self
            .knowledge
            .career(career)
            .map(|c| c.required_skills.clone())
            .unwrap_or_else(|_| curriculum.skills());
        let gap = skill_gap::calculate_gap(&args.current_skills, &required_skills);

        let budget = self
            .knowledge
            .cost_profile(career, &default_learning_resources())
            .map(|p| p.total())
            .unwrap_or_else(|_| KnowledgeBase::default_cost_profile().total());

        let data = into_object(json!({
            "career": career,
            (stage::CURRICULUM_FIELD): curriculum,
            "skill_gap": gap,
            "time_commitment": args.time_commitment,
            "budget_estimate": format!("{} - {}", format_usd(budget.min), format_usd(budget.max)),
        }));

        let message = format!(
            "Learning path created for {} with course links and certifications!",
            career
        );
        self.complete(user_id, count, message, data)
    }

    // ------------------------------------------------------------
    // Progress
    // ------------------------------------------------------------

    pub fn track_progress(&self, user_id: &str, args: ProgressArgs) -> ToolResult {
        let count = self.sessions.record_tool_call(user_id, ToolName::TrackProgress);

        let completed_skills: Vec<String> = args
            .completed_skills
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let skills_count = completed_skills.len();

        let ratio = skills_count as f64 / PROGRESS_TARGET_SKILLS as f64;
        let percentage = round_one_decimal((ratio * 100.0).min(100.0));
        let badges: Vec<String> = BADGES
            .iter()
            .filter(|(threshold, _)| skills_count >= *threshold)
            .map(|(_, badge)| badge.to_string())
            .collect();

        let next_milestone = match BADGES.iter().find(|(threshold, _)| skills_count < *threshold) {
            Some((threshold, badge)) => format!(
                "Complete {} more skills to unlock the {} badge!",
                threshold - skills_count,
                badge
            ),
            None => "Every badge earned. You're career ready!".to_string(),
        };

        let snapshot = ProgressSnapshot {
            completed_skills,
            percentage,
            badges,
            updated_at: Utc::now(),
        };
        self.sessions.set_progress(user_id, snapshot.clone());

        let data = into_object(json!({
            "user": args.user_name,
            (stage::PROGRESS_FIELD): snapshot,
            "current_phase": args.current_phase,
            "motivation_message": self.motivation(count),
            "next_milestone": next_milestone,
        }));

        let message = format!(
            "{} has completed {} skills ({}%)",
            args.user_name, skills_count, percentage
        );
        self.complete(user_id, count, message, data)
    }

    // ------------------------------------------------------------
    // Financial guidance
    // ------------------------------------------------------------

    pub fn calculate_costs(&self, user_id: &str, args: CostArgs) -> ToolResult {
        let count = self.sessions.record_tool_call(user_id, ToolName::CalculateCosts);
        let career = args.target_career.trim();

        let (profile, basis) = match self.knowledge.cost_profile(career, &args.learning_resources) {
            Ok(profile) => (profile.clone(), "career_specific"),
            Err(e) => {
                log::debug!("[tools] {}; using the general estimate", e);
                (KnowledgeBase::default_cost_profile(), "general_estimate")
            }
        };

        let total = profile.total();
        let duration_months = profile.duration();
        let monthly_avg = total.avg as f64 / duration_months as f64;
        let weekly_avg = monthly_avg / WEEKS_PER_MONTH;
        let adjusted_duration = duration_months as f64 * pace_multiplier(&args.time_commitment);
        let adjusted_monthly = total.avg as f64 / adjusted_duration;

        let mut data = into_object(json!({
            "career": career,
            "learning_type": args.learning_resources,
            "estimate_basis": basis,
            (stage::TOTAL_COST_FIELD): total.avg,
            "duration_analysis": {
                "standard_duration_months": duration_months,
                "your_pace_duration_months": round_one_decimal(adjusted_duration),
                "time_commitment": args.time_commitment,
            },
            (stage::COST_BREAKDOWN_FIELD): {
                "total_range": {
                    "minimum": format_usd(total.min),
                    "maximum": format_usd(total.max),
                    "average": format_usd(total.avg),
                },
                "time_based_costs": {
                    "monthly_average": format!("${:.2}", monthly_avg),
                    "weekly_average": format!("${:.2}", weekly_avg),
                    "daily_average": format!("${:.2}", monthly_avg / 30.0),
                    "your_pace_monthly": format!("${:.2}", adjusted_monthly),
                },
            },
            "detailed_costs": {
                "subscription_costs": profile.subscription_costs,
                "certification_costs": profile.certification_costs,
                "tool_costs": profile.tool_costs,
                "additional_costs": profile.additional_costs,
                "payment_plans": profile.payment_plans,
                "included_services": profile.included_services,
            },
            "cost_optimization_tips": [
                "Start with free resources (freeCodeCamp, Khan Academy, YouTube)",
                "Check whether your library offers free access to paid platforms",
                "Wait for sales; course marketplaces discount heavily and often",
                "Join study groups to share paid resource costs",
                "Look for employer tuition reimbursement programs",
                format!(
                    "At your pace ({}), you'll spend ~${:.0}/month",
                    args.time_commitment, adjusted_monthly
                ),
            ],
        }));

        if self.features.enable_market_data {
            let uplift = self
                .knowledge
                .salary_uplift(career)
                .cloned()
                .unwrap_or_else(|_| KnowledgeBase::default_salary_uplift());
            let break_even_months = total.avg as f64 / (uplift.annual_average as f64 / 12.0);

            data.insert(
                "roi_analysis".to_string(),
                json!({
                    "investment": format_usd(total.avg),
                    "time_to_complete": format!("{:.1} months", adjusted_duration),
                    "potential_salary_increase": uplift.range,
                    "break_even_time": format!("{:.1} months", break_even_months),
                }),
            );
        }

        let message = format!("Cost breakdown for {} via {}", career, args.learning_resources);
        self.complete(user_id, count, message, data)
    }

    pub fn find_scholarships(
        &self,
        user_id: &str,
        args: ScholarshipArgs,
    ) -> AdvisorResult<ToolResult> {
        if !self.features.enable_scholarships {
            return Err(AdvisorError::FeatureDisabled("Scholarship lookup"));
        }

        let count = self.sessions.record_tool_call(user_id, ToolName::FindScholarships);
        let career = args.target_career.trim();

        let scholarships: Vec<Scholarship> = self
            .knowledge
            .scholarships(career)
            .map(|list| list.to_vec())
            .unwrap_or_else(|e| {
                log::debug!("[tools] {}; offering general grants", e);
                KnowledgeBase::default_scholarships()
            });

        let data = into_object(json!({
            "career": career,
            "user_background": args.user_background,
            "total_opportunities": scholarships.len(),
            "available_scholarships": scholarships,
            "application_tips": [
                "Apply early and often",
                "Tailor your application to each scholarship",
                "Highlight your commitment to the career change",
                "Get letters of recommendation",
            ],
        }));

        let message = format!("Found {} funding opportunities for {}", scholarships.len(), career);
        Ok(self.complete(user_id, count, message, data))
    }
}
