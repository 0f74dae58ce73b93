//! Interaction Timeline
//!
//! Per-user history of everything the advisor did for a user: tool calls,
//! saved state, stage moves and flagged transitions. Lives in an in-memory
//! SQLite database, so it disappears with the process like the sessions do.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result as SqlResult, Row};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

// ============================================================
// EVENT TYPES
// ============================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemoryEventType {
    ToolInvoked,
    ProfileSaved,
    ProgressSaved,
    StageChanged,
    TransitionFlagged,
}

impl MemoryEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryEventType::ToolInvoked => "tool_invoked",
            MemoryEventType::ProfileSaved => "profile_saved",
            MemoryEventType::ProgressSaved => "progress_saved",
            MemoryEventType::StageChanged => "stage_changed",
            MemoryEventType::TransitionFlagged => "transition_flagged",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "tool_invoked" => Some(MemoryEventType::ToolInvoked),
            "profile_saved" => Some(MemoryEventType::ProfileSaved),
            "progress_saved" => Some(MemoryEventType::ProgressSaved),
            "stage_changed" => Some(MemoryEventType::StageChanged),
            "transition_flagged" => Some(MemoryEventType::TransitionFlagged),
            _ => None,
        }
    }
}

// ============================================================
// EVENT
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEvent {
    pub id: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub event_type: MemoryEventType,
    pub description: String,
    pub metadata: Option<serde_json::Value>,
}

impl MemoryEvent {
    pub fn new(user_id: &str, event_type: MemoryEventType, description: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            timestamp: Utc::now(),
            event_type,
            description: description.to_string(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

// ============================================================
// TIMELINE STORE
// ============================================================

/// Events kept per user; older ones are dropped first
pub const DEFAULT_EVENTS_PER_USER: usize = 500;

pub struct InteractionLog {
    conn: Mutex<Connection>,
    max_events_per_user: usize,
}

impl InteractionLog {
    pub fn in_memory() -> SqlResult<Self> {
        Self::with_limit(DEFAULT_EVENTS_PER_USER)
    }

    pub fn with_limit(max_events_per_user: usize) -> SqlResult<Self> {
        let conn = Connection::open_in_memory()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS interaction_events (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                user_id TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                event_type TEXT NOT NULL,
                description TEXT NOT NULL,
                metadata TEXT
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_interaction_user_id ON interaction_events(user_id)",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            max_events_per_user: max_events_per_user.max(1),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record(&self, event: &MemoryEvent) -> SqlResult<()> {
        let conn = self.lock();
        let metadata_json = event.metadata.as_ref().map(|m| m.to_string());

        conn.execute(
            "INSERT INTO interaction_events
                (id, user_id, timestamp, event_type, description, metadata)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                event.id,
                event.user_id,
                event.timestamp.to_rfc3339(),
                event.event_type.as_str(),
                event.description,
                metadata_json,
            ],
        )?;

        conn.execute(
            "DELETE FROM interaction_events
             WHERE user_id = ?1 AND seq NOT IN (
                 SELECT seq FROM interaction_events
                 WHERE user_id = ?1
                 ORDER BY seq DESC
                 LIMIT ?2
             )",
            params![event.user_id, self.max_events_per_user as i64],
        )?;

        Ok(())
    }

    /// All events for a user, oldest first
    pub fn user_timeline(&self, user_id: &str) -> SqlResult<Vec<MemoryEvent>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT id, user_id, timestamp, event_type, description, metadata
             FROM interaction_events
             WHERE user_id = ?1
             ORDER BY seq ASC",
        )?;

        let events = stmt.query_map([user_id], event_from_row)?;
        let timeline = events.collect::<SqlResult<Vec<_>>>()?;
        Ok(timeline)
    }

    /// Drop a user's history; returns how many events were removed
    pub fn clear_user(&self, user_id: &str) -> SqlResult<usize> {
        let conn = self.lock();
        conn.execute("DELETE FROM interaction_events WHERE user_id = ?1", [user_id])
    }
}

fn event_from_row(row: &Row<'_>) -> SqlResult<MemoryEvent> {
    let timestamp_str: String = row.get(2)?;
    let event_type_str: String = row.get(3)?;
    let metadata_str: Option<String> = row.get(5)?;

    Ok(MemoryEvent {
        id: row.get(0)?,
        user_id: row.get(1)?,
        timestamp: DateTime::parse_from_rfc3339(&timestamp_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
        event_type: MemoryEventType::from_str(&event_type_str)
            .unwrap_or(MemoryEventType::ToolInvoked),
        description: row.get(4)?,
        metadata: metadata_str.and_then(|s| serde_json::from_str(&s).ok()),
    })
}
