use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::ticket::TicketPriority;

/// Turnaround-time breakdown over the resolved/closed subset of a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TatMetrics {
    pub within_sla: u64,
    pub exceeded_sla: u64,
    pub avg_tat: f64,
}

/// Aggregate figures for one slice of tickets (the whole batch, or one
/// priority bucket). Averages are 0.0 when no ticket qualifies; the
/// compliance rate is a percentage and is 0.0 for an empty slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorityMetrics {
    pub total_tickets: u64,
    pub avg_resolution_time: f64,
    pub avg_first_response_time: f64,
    pub sla_compliance_rate: f64,
    pub tat: TatMetrics,
}

/// Batch statistics over a ticket set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlaMetrics {
    pub total_tickets: u64,
    pub avg_resolution_time: f64,
    pub avg_first_response_time: f64,
    pub sla_compliance_rate: f64,
    pub tat: TatMetrics,
    pub by_priority: HashMap<TicketPriority, PriorityMetrics>,
}

/// One calendar day of the trend series. Days with no qualifying tickets
/// report zeros, never nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBucket {
    pub date: NaiveDate,
    pub created: u64,
    pub resolved: u64,
    pub avg_first_response_time: f64,
    pub avg_resolution_time: f64,
}

impl TrendBucket {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            created: 0,
            resolved: 0,
            avg_first_response_time: 0.0,
            avg_resolution_time: 0.0,
        }
    }
}
