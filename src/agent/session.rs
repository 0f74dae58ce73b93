//! Session Store
//!
//! Owns every user's session record: profile, progress, workflow stage and
//! interaction count. Records are created lazily on the first mutation and
//! removed entirely by `reset`. Nothing here is persisted.
//!
//! Every access is a fresh lookup by user id; callers get clones, never
//! references into the map.

use super::memory::{InteractionLog, MemoryEvent, MemoryEventType};
use super::stage;
use super::types::{ProgressSnapshot, Stage, ToolName, UserProfile};
use crate::config::TransitionPolicy;
use crate::error::{AdvisorError, AdvisorResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

// ============================================================
// SESSION RECORD
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserSession {
    pub profile: Option<UserProfile>,
    pub progress: Option<ProgressSnapshot>,
    pub stage: Stage,
    pub interaction_count: u64,
}

/// Outcome of a stage write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageChange {
    pub from: Stage,
    pub to: Stage,
    /// false when the move is outside the whitelist table
    pub regular: bool,
}

// ============================================================
// STORE
// ============================================================

pub struct SessionStore {
    sessions: Mutex<HashMap<String, UserSession>>,
    timeline: InteractionLog,
    policy: TransitionPolicy,
}

impl SessionStore {
    pub fn new(policy: TransitionPolicy) -> AdvisorResult<Self> {
        Ok(Self {
            sessions: Mutex::new(HashMap::new()),
            timeline: InteractionLog::in_memory()?,
            policy,
        })
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, UserSession>> {
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn log_event(&self, event: MemoryEvent) {
        if let Err(e) = self.timeline.record(&event) {
            log::warn!(
                "[session] Failed to record {} for {}: {}",
                event.event_type.as_str(),
                event.user_id,
                e
            );
        }
    }

    /// Existing record, or a fresh default for unseen users. Never fails.
    pub fn get(&self, user_id: &str) -> UserSession {
        self.sessions().get(user_id).cloned().unwrap_or_default()
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.sessions().contains_key(user_id)
    }

    pub fn user_count(&self) -> usize {
        self.sessions().len()
    }

    /// Increment and return the interaction count
    pub fn record_interaction(&self, user_id: &str) -> u64 {
        let mut sessions = self.sessions();
        let session = sessions.entry(user_id.to_string()).or_default();
        session.interaction_count += 1;
        session.interaction_count
    }

    /// `record_interaction` plus a timeline entry naming the tool
    pub fn record_tool_call(&self, user_id: &str, tool: ToolName) -> u64 {
        let count = self.record_interaction(user_id);
        self.log_event(
            MemoryEvent::new(user_id, MemoryEventType::ToolInvoked, tool.as_str())
                .with_metadata(json!({ "interaction_count": count })),
        );
        count
    }

    pub fn set_profile(&self, user_id: &str, profile: UserProfile) {
        let description = format!("Profile saved for {}", profile.name);
        self.sessions().entry(user_id.to_string()).or_default().profile = Some(profile);
        self.log_event(MemoryEvent::new(user_id, MemoryEventType::ProfileSaved, &description));
    }

    pub fn set_progress(&self, user_id: &str, progress: ProgressSnapshot) {
        let description = format!(
            "Progress saved: {} skills, {}%",
            progress.completed_skills.len(),
            progress.percentage
        );
        self.sessions().entry(user_id.to_string()).or_default().progress = Some(progress);
        self.log_event(MemoryEvent::new(user_id, MemoryEventType::ProgressSaved, &description));
    }

    /// Overwrite the stage. Moves outside the whitelist are flagged, and
    /// rejected under the strict policy.
    pub fn set_stage(&self, user_id: &str, to: Stage) -> AdvisorResult<StageChange> {
        let from = {
            let mut sessions = self.sessions();
            let from = sessions.get(user_id).map(|s| s.stage).unwrap_or_default();
            let regular = stage::is_regular_transition(from, to);

            if !regular && self.policy == TransitionPolicy::Strict {
                log::warn!(
                    "[session] Rejected stage transition {} -> {} for {}",
                    from,
                    to,
                    user_id
                );
                return Err(AdvisorError::InvalidTransition { from, to });
            }

            sessions.entry(user_id.to_string()).or_default().stage = to;
            from
        };

        let change = StageChange {
            from,
            to,
            regular: stage::is_regular_transition(from, to),
        };

        if from != to {
            self.log_event(
                MemoryEvent::new(
                    user_id,
                    MemoryEventType::StageChanged,
                    &format!("{} -> {}", from, to),
                )
                    .with_metadata(json!({ "from": from, "to": to })),
            );
        }

        if !change.regular {
            log::warn!("[session] Irregular stage transition {} -> {} for {}", from, to, user_id);
            self.log_event(
                MemoryEvent::new(
                    user_id,
                    MemoryEventType::TransitionFlagged,
                    &format!("Irregular transition {} -> {}", from, to),
                )
                .with_metadata(json!({ "from": from, "to": to })),
            );
        }

        Ok(change)
    }

    /// Remove the user's session and history. Returns whether a session existed.
    pub fn reset(&self, user_id: &str) -> bool {
        let existed = self.sessions().remove(user_id).is_some();
        match self.timeline.clear_user(user_id) {
            Ok(removed) => {
                log::info!("[session] Reset {} ({} timeline events removed)", user_id, removed)
            }
            Err(e) => log::warn!("[session] Failed to clear timeline for {}: {}", user_id, e),
        }
        existed
    }

    pub fn history(&self, user_id: &str) -> AdvisorResult<Vec<MemoryEvent>> {
        Ok(self.timeline.user_timeline(user_id)?)
    }

    /// Run a named state action (the `manage_state` tool)
    pub fn apply_action(
        &self,
        action: &str,
        user_id: &str,
        data: &str,
    ) -> AdvisorResult<StateActionOutcome> {
        let action = StateAction::from_str(action)
            .ok_or_else(|| AdvisorError::UnknownAction(action.to_string()))?;

        let mut fields = Map::new();
        let message = match action {
            StateAction::SaveProfile => {
                let profile: UserProfile = serde_json::from_str(data)?;
                self.record_interaction(user_id);
                self.set_profile(user_id, profile);
                "Profile saved to conversation memory".to_string()
            }
            StateAction::GetProfile => {
                let profile = self.get(user_id).profile;
                fields.insert("profile".to_string(), to_value_or_empty(profile));
                "Profile loaded from conversation memory".to_string()
            }
            StateAction::SaveProgress => {
                let progress: ProgressSnapshot = serde_json::from_str(data)?;
                self.record_interaction(user_id);
                self.set_progress(user_id, progress);
                "Progress saved to conversation memory".to_string()
            }
            StateAction::GetProgress => {
                let progress = self.get(user_id).progress;
                fields.insert("progress".to_string(), to_value_or_empty(progress));
                "Progress loaded from conversation memory".to_string()
            }
            StateAction::Reset => {
                self.reset(user_id);
                "User data reset".to_string()
            }
            StateAction::ListAll => {
                fields.insert("session".to_string(), serde_json::to_value(self.get(user_id))?);
                fields.insert("history".to_string(), serde_json::to_value(self.history(user_id)?)?);
                "User data loaded".to_string()
            }
        };

        Ok(StateActionOutcome {
            action,
            message,
            fields,
        })
    }
}

fn to_value_or_empty<T: Serialize>(value: Option<T>) -> Value {
    value
        .and_then(|v| serde_json::to_value(v).ok())
        .unwrap_or_else(|| Value::Object(Map::new()))
}

// ============================================================
// STATE ACTIONS
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateAction {
    SaveProfile,
    GetProfile,
    SaveProgress,
    GetProgress,
    Reset,
    ListAll,
}

impl StateAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "save_profile" => Some(StateAction::SaveProfile),
            "get_profile" => Some(StateAction::GetProfile),
            "save_progress" => Some(StateAction::SaveProgress),
            "get_progress" => Some(StateAction::GetProgress),
            "reset" => Some(StateAction::Reset),
            "list_all" => Some(StateAction::ListAll),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StateActionOutcome {
    pub action: StateAction,
    pub message: String,
    pub fields: Map<String, Value>,
}
