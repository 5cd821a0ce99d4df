use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ticket::TicketPriority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaStatus {
    OnTime,
    NearBreach,
    Breached,
    Pending,
}

impl fmt::Display for SlaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlaStatus::OnTime => write!(f, "on_time"),
            SlaStatus::NearBreach => write!(f, "near_breach"),
            SlaStatus::Breached => write!(f, "breached"),
            SlaStatus::Pending => write!(f, "pending"),
        }
    }
}

impl std::str::FromStr for SlaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on_time" => Ok(SlaStatus::OnTime),
            "near_breach" => Ok(SlaStatus::NearBreach),
            "breached" => Ok(SlaStatus::Breached),
            "pending" => Ok(SlaStatus::Pending),
            _ => Err(format!("Invalid SLA status: {}", s)),
        }
    }
}

/// One track (response or resolution) of a ticket's SLA standing,
/// computed fresh against a caller-supplied "now". Never cached: it is a
/// pure function of the ticket snapshot, calendar and budget.
///
/// `remaining_hours` is `target - elapsed` and goes negative once the
/// budget is exceeded; the magnitude is then the overdue amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlaEvaluation {
    pub status: SlaStatus,
    pub elapsed_business_hours: f64,
    pub target_hours: f64,
    pub remaining_hours: f64,
}

impl SlaEvaluation {
    pub fn is_breached(&self) -> bool {
        self.status == SlaStatus::Breached
    }
}

/// Both SLA tracks for one ticket. A ticket can fail response while
/// passing resolution, or the other way around; compliance requires both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TicketSlaReport {
    pub response: SlaEvaluation,
    pub resolution: SlaEvaluation,
}

impl TicketSlaReport {
    pub fn is_compliant(&self) -> bool {
        !self.response.is_breached() && !self.resolution.is_breached()
    }
}

/// Forward-looking near-breach alert. Tickets already past due are
/// deliberately excluded; they belong in the breach report instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaAlert {
    pub ticket_id: String,
    pub priority: TicketPriority,
    pub remaining_hours: f64,
    pub created_at: NaiveDateTime,
}
