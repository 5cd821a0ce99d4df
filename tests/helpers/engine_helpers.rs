#![allow(dead_code)]
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use std::sync::Arc;

use redress_sla::{
    AlertScanner, BusinessCalendar, BusinessHoursCalculator, Holiday, HolidayKind,
    MetricsAggregator, SlaBudget, SlaEvaluator, TicketPriority, TicketSnapshot, TicketStatus,
    WorkingHoursPolicy,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_time(NaiveTime::from_hms_opt(h, min, 0).expect("valid time"))
}

/// Monday through Friday, 09:00-17:00
pub fn weekday_policy() -> WorkingHoursPolicy {
    WorkingHoursPolicy::standard()
}

/// Monday through Saturday, 09:00-17:00
pub fn mon_sat_policy() -> WorkingHoursPolicy {
    let weekdays = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ]
    .into_iter()
    .collect();
    WorkingHoursPolicy::new(
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        weekdays,
    )
}

pub fn holiday(name: &str, on: NaiveDate) -> Holiday {
    Holiday::new(name.to_string(), on, HolidayKind::Government, false)
}

pub fn calendar(policy: WorkingHoursPolicy, holidays: Vec<Holiday>) -> Arc<BusinessCalendar> {
    Arc::new(BusinessCalendar::new(policy, &holidays))
}

/// critical 1h/4h, high 2h/8h, medium 4h/24h, low 8h/48h
pub fn default_budget() -> Arc<SlaBudget> {
    Arc::new(SlaBudget::default())
}

pub fn calculator(cal: &Arc<BusinessCalendar>) -> BusinessHoursCalculator {
    BusinessHoursCalculator::new(cal.clone())
}

pub fn evaluator(cal: &Arc<BusinessCalendar>, budget: &Arc<SlaBudget>) -> SlaEvaluator {
    SlaEvaluator::new(cal.clone(), budget.clone())
}

pub fn aggregator(cal: &Arc<BusinessCalendar>, budget: &Arc<SlaBudget>) -> MetricsAggregator {
    MetricsAggregator::new(evaluator(cal, budget))
}

pub fn scanner(cal: &Arc<BusinessCalendar>, budget: &Arc<SlaBudget>) -> AlertScanner {
    AlertScanner::new(evaluator(cal, budget))
}

pub fn open_ticket(id: &str, priority: TicketPriority, created_at: NaiveDateTime) -> TicketSnapshot {
    let mut ticket = TicketSnapshot::new(id.to_string(), created_at);
    ticket.priority = priority;
    ticket
}

pub fn responded_ticket(
    id: &str,
    priority: TicketPriority,
    created_at: NaiveDateTime,
    first_response_at: NaiveDateTime,
) -> TicketSnapshot {
    let mut ticket = open_ticket(id, priority, created_at);
    ticket.status = TicketStatus::InProgress;
    ticket.first_response_at = Some(first_response_at);
    ticket
}

pub fn resolved_ticket(
    id: &str,
    priority: TicketPriority,
    created_at: NaiveDateTime,
    resolved_at: NaiveDateTime,
) -> TicketSnapshot {
    let mut ticket = open_ticket(id, priority, created_at);
    ticket.status = TicketStatus::Resolved;
    ticket.resolved_at = Some(resolved_at);
    ticket
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}
