use chrono::{NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;

use crate::models::{
    parse_duration_hours, Holiday, PriorityBudget, SlaBudget, WorkingHoursPolicy,
};
use crate::services::BusinessCalendar;

/// Engine configuration, loaded once and treated as immutable for the
/// lifetime of an evaluation batch. All calendar/policy misconfiguration
/// is rejected here so the engine never has to re-validate per call.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub timezone: Tz,
    pub working_hours: WorkingHoursPolicy,
    pub budgets: SlaBudget,
    pub holidays: Vec<Holiday>,
    pub alert_lead_hours: f64,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let tz_name = env::var("ORG_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
        let timezone: Tz = tz_name
            .parse()
            .map_err(|_| ConfigError::InvalidTimezone(tz_name))?;

        let start_time = parse_clock(
            "WORK_START",
            &env::var("WORK_START").unwrap_or_else(|_| "09:00".to_string()),
        )?;
        let end_time = parse_clock(
            "WORK_END",
            &env::var("WORK_END").unwrap_or_else(|_| "17:00".to_string()),
        )?;
        let working_weekdays = parse_weekdays(
            &env::var("WORKING_WEEKDAYS").unwrap_or_else(|_| "Mon,Tue,Wed,Thu,Fri".to_string()),
        )?;

        let working_hours = WorkingHoursPolicy::new(start_time, end_time, working_weekdays);
        working_hours
            .validate()
            .map_err(ConfigError::InvalidWorkingHours)?;

        let budgets = SlaBudget {
            critical: parse_budget_pair(
                "SLA_BUDGET_CRITICAL",
                &env::var("SLA_BUDGET_CRITICAL").unwrap_or_else(|_| "1h/4h".to_string()),
            )?,
            high: parse_budget_pair(
                "SLA_BUDGET_HIGH",
                &env::var("SLA_BUDGET_HIGH").unwrap_or_else(|_| "2h/8h".to_string()),
            )?,
            medium: parse_budget_pair(
                "SLA_BUDGET_MEDIUM",
                &env::var("SLA_BUDGET_MEDIUM").unwrap_or_else(|_| "4h/24h".to_string()),
            )?,
            low: parse_budget_pair(
                "SLA_BUDGET_LOW",
                &env::var("SLA_BUDGET_LOW").unwrap_or_else(|_| "8h/48h".to_string()),
            )?,
        };
        budgets.validate().map_err(ConfigError::InvalidBudget)?;

        let alert_lead_hours = parse_duration_hours(
            &env::var("SLA_ALERT_LEAD_HOURS").unwrap_or_else(|_| "4h".to_string()),
        )
        .map_err(ConfigError::InvalidLeadTime)?;

        let holidays = match env::var("HOLIDAY_CALENDAR_PATH") {
            Ok(path) => load_holidays(Path::new(&path))?,
            Err(_) => Vec::new(),
        };
        ensure_unique_dates(&holidays)?;

        Ok(EngineConfig {
            timezone,
            working_hours,
            budgets,
            holidays,
            alert_lead_hours,
        })
    }

    /// Build the immutable calendar value for an evaluation batch.
    pub fn calendar(&self) -> BusinessCalendar {
        BusinessCalendar::new(self.working_hours.clone(), &self.holidays)
    }
}

/// Read a holiday calendar from a JSON file.
pub fn load_holidays(path: &Path) -> Result<Vec<Holiday>, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ConfigError::HolidayFile(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&raw)
        .map_err(|e| ConfigError::HolidayFile(path.display().to_string(), e.to_string()))
}

fn parse_clock(label: &'static str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| ConfigError::InvalidClockTime(label, value.to_string()))
}

fn parse_weekdays(value: &str) -> Result<HashSet<Weekday>, ConfigError> {
    let mut weekdays = HashSet::new();
    for part in value.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let weekday: Weekday = part
            .parse()
            .map_err(|_| ConfigError::InvalidWeekdays(part.to_string()))?;
        weekdays.insert(weekday);
    }
    Ok(weekdays)
}

/// Parse a "<response>/<resolution>" duration pair like "1h/4h".
fn parse_budget_pair(label: &'static str, value: &str) -> Result<PriorityBudget, ConfigError> {
    let (response, resolution) = value
        .split_once('/')
        .ok_or_else(|| ConfigError::InvalidBudgetPair(label, value.to_string()))?;
    let response_hours = parse_duration_hours(response.trim())
        .map_err(|_| ConfigError::InvalidBudgetPair(label, value.to_string()))?;
    let resolution_hours = parse_duration_hours(resolution.trim())
        .map_err(|_| ConfigError::InvalidBudgetPair(label, value.to_string()))?;
    Ok(PriorityBudget::new(response_hours, resolution_hours))
}

/// At most one holiday per calendar date.
fn ensure_unique_dates(holidays: &[Holiday]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for holiday in holidays {
        if !seen.insert(holiday.date) {
            return Err(ConfigError::DuplicateHoliday(holiday.date));
        }
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid clock time for {0}: {1}")]
    InvalidClockTime(&'static str, String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekdays(String),

    #[error("Invalid working hours: {0}")]
    InvalidWorkingHours(String),

    #[error("Invalid SLA budget: {0}")]
    InvalidBudget(String),

    #[error("Invalid duration pair for {0}: {1} (expected <response>/<resolution>)")]
    InvalidBudgetPair(&'static str, String),

    #[error("Invalid alert lead time: {0}")]
    InvalidLeadTime(String),

    #[error("Duplicate holiday on {0}")]
    DuplicateHoliday(NaiveDate),

    #[error("Holiday calendar {0}: {1}")]
    HolidayFile(String, String),
}
