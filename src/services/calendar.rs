use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::collections::HashSet;

use crate::models::{Holiday, WorkingHoursPolicy};

/// Immutable calendar snapshot: the working-hours policy plus the holiday
/// set, built once per evaluation batch. Holiday edits on the admin side
/// produce a new calendar value; concurrent evaluations never observe a
/// half-updated one.
#[derive(Debug, Clone)]
pub struct BusinessCalendar {
    policy: WorkingHoursPolicy,
    fixed_holidays: HashSet<NaiveDate>,
    recurring_holidays: HashSet<(u32, u32)>, // (month, day)
}

impl BusinessCalendar {
    pub fn new(policy: WorkingHoursPolicy, holidays: &[Holiday]) -> Self {
        let mut fixed_holidays = HashSet::new();
        let mut recurring_holidays = HashSet::new();
        for holiday in holidays {
            if holiday.recurring {
                recurring_holidays.insert((holiday.date.month(), holiday.date.day()));
            } else {
                fixed_holidays.insert(holiday.date);
            }
        }
        Self {
            policy,
            fixed_holidays,
            recurring_holidays,
        }
    }

    pub fn policy(&self) -> &WorkingHoursPolicy {
        &self.policy
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.fixed_holidays.contains(&date)
            || self.recurring_holidays.contains(&(date.month(), date.day()))
    }

    /// A date is a working day when its weekday is in the working set and
    /// it matches no holiday. A holiday on a non-working weekday has no
    /// additional effect.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.policy.working_weekdays.contains(&date.weekday()) && !self.is_holiday(date)
    }

    /// Working day AND clock time within the daily window, both bounds
    /// inclusive.
    pub fn is_working_instant(&self, at: NaiveDateTime) -> bool {
        self.is_working_day(at.date())
            && at.time() >= self.policy.start_time
            && at.time() <= self.policy.end_time
    }

    /// The working window for a date, or `None` on non-working days.
    pub fn day_window(&self, date: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
        if !self.is_working_day(date) {
            return None;
        }
        Some((
            date.and_time(self.policy.start_time),
            date.and_time(self.policy.end_time),
        ))
    }

    pub fn daily_working_hours(&self) -> f64 {
        self.policy.daily_working_hours()
    }
}
