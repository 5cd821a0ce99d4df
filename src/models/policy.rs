use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::ticket::TicketPriority;

// ===== Working Hours Policy =====

/// Process-wide working-hours configuration: the same daily clock window
/// applies to every working weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHoursPolicy {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub working_weekdays: HashSet<Weekday>,
}

impl WorkingHoursPolicy {
    pub fn new(start_time: NaiveTime, end_time: NaiveTime, working_weekdays: HashSet<Weekday>) -> Self {
        Self {
            start_time,
            end_time,
            working_weekdays,
        }
    }

    /// Monday through Friday, 09:00 to 17:00.
    pub fn standard() -> Self {
        let working_weekdays = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ]
        .into_iter()
        .collect();
        Self {
            start_time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid clock time"),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).expect("valid clock time"),
            working_weekdays,
        }
    }

    /// Validated once at configuration load; the engine never re-checks
    /// per call.
    pub fn validate(&self) -> Result<(), String> {
        if self.start_time >= self.end_time {
            return Err(format!(
                "Working hours start ({}) must be before end ({})",
                self.start_time, self.end_time
            ));
        }
        if self.working_weekdays.is_empty() {
            return Err("At least one working weekday is required".to_string());
        }
        Ok(())
    }

    pub fn daily_working_hours(&self) -> f64 {
        (self.end_time - self.start_time).num_seconds() as f64 / 3600.0
    }
}

// ===== SLA Budget =====

/// Response and resolution time budget for one priority, in business hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityBudget {
    pub response_hours: f64,
    pub resolution_hours: f64,
}

impl PriorityBudget {
    pub fn new(response_hours: f64, resolution_hours: f64) -> Self {
        Self {
            response_hours,
            resolution_hours,
        }
    }
}

/// Static per-priority budget table. All four priorities always have an
/// entry, so lookup by enum is total; raw-label lookup recovers from an
/// unrecognized priority by substituting the medium budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaBudget {
    pub critical: PriorityBudget,
    pub high: PriorityBudget,
    pub medium: PriorityBudget,
    pub low: PriorityBudget,
}

impl SlaBudget {
    pub fn budget_for(&self, priority: TicketPriority) -> PriorityBudget {
        match priority {
            TicketPriority::Critical => self.critical,
            TicketPriority::High => self.high,
            TicketPriority::Medium => self.medium,
            TicketPriority::Low => self.low,
        }
    }

    /// Lookup for priority labels coming straight off external records.
    /// An unknown label is recovered locally, never surfaced as a hard
    /// failure.
    pub fn budget_for_label(&self, label: &str) -> PriorityBudget {
        match TicketPriority::try_from_label(label) {
            Ok(priority) => self.budget_for(priority),
            Err(_) => {
                tracing::warn!("Unknown priority '{}', using medium budget", label);
                self.medium
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        for priority in TicketPriority::ALL {
            let budget = self.budget_for(priority);
            if budget.response_hours <= 0.0 || budget.resolution_hours <= 0.0 {
                return Err(format!("Budget for {} priority must be positive", priority));
            }
        }
        Ok(())
    }
}

impl Default for SlaBudget {
    fn default() -> Self {
        Self {
            critical: PriorityBudget::new(1.0, 4.0),
            high: PriorityBudget::new(2.0, 8.0),
            medium: PriorityBudget::new(4.0, 24.0),
            low: PriorityBudget::new(8.0, 48.0),
        }
    }
}

// ===== Duration Parsing Utility =====

use regex::Regex;
use std::sync::OnceLock;

/// Parse duration string like "2h", "30m", "1d" into fractional hours
pub fn parse_duration_hours(duration_str: &str) -> Result<f64, String> {
    static DURATION_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = DURATION_REGEX
        .get_or_init(|| Regex::new(r"^(\d+)([hmd])$").expect("Invalid duration regex"));

    let caps = re.captures(duration_str).ok_or_else(|| {
        format!(
            "Invalid duration format: {}. Expected format: <number><h|m|d>",
            duration_str
        )
    })?;

    let number: i64 = caps[1]
        .parse()
        .map_err(|_| format!("Invalid number in duration: {}", &caps[1]))?;

    let unit = &caps[2];

    let hours = match unit {
        "m" => number as f64 / 60.0,
        "h" => number as f64,
        "d" => number as f64 * 24.0,
        _ => return Err(format!("Invalid duration unit: {}", unit)),
    };

    if hours <= 0.0 {
        return Err("Duration must be greater than 0".to_string());
    }

    Ok(hours)
}
