use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{SlaError, SlaResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Open and in-progress tickets still count against the running clock.
    pub fn is_active(&self) -> bool {
        matches!(self, TicketStatus::Open | TicketStatus::InProgress)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::InProgress => write!(f, "in_progress"),
            TicketStatus::Resolved => write!(f, "resolved"),
            TicketStatus::Closed => write!(f, "closed"),
        }
    }
}

// Convert from string (for records coming out of the ticket store)
impl From<String> for TicketStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "in_progress" => TicketStatus::InProgress,
            "resolved" => TicketStatus::Resolved,
            "closed" => TicketStatus::Closed,
            _ => TicketStatus::Open,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Critical,
        TicketPriority::High,
        TicketPriority::Medium,
        TicketPriority::Low,
    ];

    /// Strict parse. Callers that want the permissive medium-default
    /// behavior should go through `From<String>` instead.
    pub fn try_from_label(s: &str) -> SlaResult<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(TicketPriority::Critical),
            "high" => Ok(TicketPriority::High),
            "medium" => Ok(TicketPriority::Medium),
            "low" => Ok(TicketPriority::Low),
            _ => Err(SlaError::UnknownPriority(s.to_string())),
        }
    }
}

impl Default for TicketPriority {
    fn default() -> Self {
        TicketPriority::Medium
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketPriority::Critical => write!(f, "critical"),
            TicketPriority::High => write!(f, "high"),
            TicketPriority::Medium => write!(f, "medium"),
            TicketPriority::Low => write!(f, "low"),
        }
    }
}

// Unknown or absent priority falls back to medium
impl From<String> for TicketPriority {
    fn from(s: String) -> Self {
        TicketPriority::try_from_label(&s).unwrap_or(TicketPriority::Medium)
    }
}

/// The read-only subset of a ticket the SLA engine consumes. All
/// timestamps must already be normalized to the org timezone; use
/// `TicketSnapshot::localize` at the boundary when the store hands out
/// UTC instants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSnapshot {
    pub id: String,
    pub created_at: NaiveDateTime,
    pub first_response_at: Option<NaiveDateTime>,
    pub resolved_at: Option<NaiveDateTime>,
    pub closed_at: Option<NaiveDateTime>,
    pub status: TicketStatus,
    pub priority: TicketPriority,
}

impl TicketSnapshot {
    pub fn new(id: String, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            created_at,
            first_response_at: None,
            resolved_at: None,
            closed_at: None,
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
        }
    }

    /// Normalize a UTC instant to the org's local wall-clock time. This
    /// conversion is a documented precondition of the engine: every
    /// timestamp in a snapshot must have gone through it (or have been
    /// recorded local to begin with).
    pub fn localize(instant: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
        instant.with_timezone(&tz).naive_local()
    }

    /// A ticket counts as resolved for aggregate purposes only when the
    /// resolution timestamp is present AND the status agrees.
    pub fn is_closed_out(&self) -> bool {
        self.resolved_at.is_some() && self.status.is_resolved()
    }
}
