use chrono::NaiveDateTime;
use std::sync::Arc;

use crate::domain::errors::{SlaError, SlaResult};
use crate::services::calendar::BusinessCalendar;

/// Computes elapsed working time between two instants against an
/// immutable [`BusinessCalendar`]. The calendar walk is the single source
/// of truth; callers that want a wall-clock figure for display use
/// [`BusinessHoursCalculator::elapsed_calendar_hours`] instead of any
/// proration of this result.
#[derive(Clone)]
pub struct BusinessHoursCalculator {
    calendar: Arc<BusinessCalendar>,
}

impl BusinessHoursCalculator {
    pub fn new(calendar: Arc<BusinessCalendar>) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    /// Elapsed working hours in `[start, end]`.
    ///
    /// Walks the span day by day; each working day contributes the
    /// overlap between `[start, end]` and that day's working window. The
    /// first and last days are naturally partial because the overall
    /// interval clips them; interior days contribute the full daily
    /// window or zero.
    pub fn elapsed_business_hours(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> SlaResult<f64> {
        if start > end {
            return Err(SlaError::InvalidRange { start, end });
        }
        if start == end {
            return Ok(0.0);
        }

        let mut total_seconds: i64 = 0;
        let mut day = start.date();
        while day <= end.date() {
            if let Some((window_start, window_end)) = self.calendar.day_window(day) {
                let overlap_start = window_start.max(start);
                let overlap_end = window_end.min(end);
                if overlap_end > overlap_start {
                    total_seconds += (overlap_end - overlap_start).num_seconds();
                }
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        Ok(total_seconds as f64 / 3600.0)
    }

    /// Plain wall-clock hours in `[start, end]`, for callers that want to
    /// surface elapsed calendar time alongside the business-hours figure.
    pub fn elapsed_calendar_hours(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> SlaResult<f64> {
        if start > end {
            return Err(SlaError::InvalidRange { start, end });
        }
        Ok((end - start).num_seconds() as f64 / 3600.0)
    }
}
