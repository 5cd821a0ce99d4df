use chrono::NaiveDateTime;
use std::sync::Arc;

use crate::domain::errors::{SlaError, SlaResult};
use crate::models::{SlaBudget, SlaEvaluation, SlaStatus, TicketSlaReport, TicketSnapshot};
use crate::services::business_hours::BusinessHoursCalculator;
use crate::services::calendar::BusinessCalendar;

/// Fraction of the budget at which an unresolved ticket flips from
/// pending to near-breach.
pub const NEAR_BREACH_RATIO: f64 = 0.8;

// Threshold comparisons must tolerate the rounding introduced by the
// seconds-to-hours conversion; well below one second of working time.
const TIME_EPSILON: f64 = 1e-9;

/// Read-only, on-demand classifier of a single ticket's SLA standing.
/// Never mutates ticket state; transitions are driven purely by the
/// caller-supplied "now" and by the external system setting
/// `resolved_at` / `first_response_at`.
#[derive(Clone)]
pub struct SlaEvaluator {
    calculator: BusinessHoursCalculator,
    budget: Arc<SlaBudget>,
}

impl SlaEvaluator {
    pub fn new(calendar: Arc<BusinessCalendar>, budget: Arc<SlaBudget>) -> Self {
        Self {
            calculator: BusinessHoursCalculator::new(calendar),
            budget,
        }
    }

    pub fn calculator(&self) -> &BusinessHoursCalculator {
        &self.calculator
    }

    pub fn budget(&self) -> &SlaBudget {
        &self.budget
    }

    /// Both SLA tracks for one ticket.
    pub fn evaluate(&self, ticket: &TicketSnapshot, now: NaiveDateTime) -> SlaResult<TicketSlaReport> {
        Ok(TicketSlaReport {
            response: self.evaluate_response(ticket, now)?,
            resolution: self.evaluate_resolution(ticket, now)?,
        })
    }

    /// Resolution track: classifies against the resolution budget, using
    /// `resolved_at` when set and the running clock otherwise.
    pub fn evaluate_resolution(
        &self,
        ticket: &TicketSnapshot,
        now: NaiveDateTime,
    ) -> SlaResult<SlaEvaluation> {
        let target = self.budget.budget_for(ticket.priority).resolution_hours;
        self.classify(ticket.created_at, ticket.resolved_at, target, now)
    }

    /// Response track: identical rules with the response budget and
    /// `first_response_at`.
    pub fn evaluate_response(
        &self,
        ticket: &TicketSnapshot,
        now: NaiveDateTime,
    ) -> SlaResult<SlaEvaluation> {
        let target = self.budget.budget_for(ticket.priority).response_hours;
        self.classify(ticket.created_at, ticket.first_response_at, target, now)
    }

    /// Working hours still left on the resolution budget against the
    /// running clock. Negative once the ticket is past due.
    pub fn remaining_resolution_hours(
        &self,
        ticket: &TicketSnapshot,
        now: NaiveDateTime,
    ) -> SlaResult<f64> {
        let target = self.budget.budget_for(ticket.priority).resolution_hours;
        let elapsed = self
            .calculator
            .elapsed_business_hours(ticket.created_at, now)?;
        Ok(target - elapsed)
    }

    /// How far past the resolution budget an already-resolved ticket
    /// landed. Zero for tickets that met their budget; requires
    /// `resolved_at`.
    pub fn breach_duration(&self, ticket: &TicketSnapshot) -> SlaResult<f64> {
        let resolved_at = ticket
            .resolved_at
            .ok_or(SlaError::MissingTimestamp("resolved_at"))?;
        let target = self.budget.budget_for(ticket.priority).resolution_hours;
        let elapsed = self
            .calculator
            .elapsed_business_hours(ticket.created_at, resolved_at)?;
        Ok((elapsed - target).max(0.0))
    }

    /// Compliance requires both tracks to be unbreached.
    pub fn is_compliant(&self, ticket: &TicketSnapshot, now: NaiveDateTime) -> SlaResult<bool> {
        Ok(self.evaluate(ticket, now)?.is_compliant())
    }

    // Completed tickets compare elapsed against the budget exclusively
    // (landing exactly on the budget is on time); the running clock uses
    // inclusive thresholds so the breach fires the instant the budget is
    // consumed.
    fn classify(
        &self,
        created_at: NaiveDateTime,
        completed_at: Option<NaiveDateTime>,
        target_hours: f64,
        now: NaiveDateTime,
    ) -> SlaResult<SlaEvaluation> {
        let (elapsed, status) = match completed_at {
            Some(done) => {
                let elapsed = self.calculator.elapsed_business_hours(created_at, done)?;
                let status = if elapsed > target_hours + TIME_EPSILON {
                    SlaStatus::Breached
                } else {
                    SlaStatus::OnTime
                };
                (elapsed, status)
            }
            None => {
                let elapsed = self.calculator.elapsed_business_hours(created_at, now)?;
                let status = if elapsed >= target_hours - TIME_EPSILON {
                    SlaStatus::Breached
                } else if elapsed >= NEAR_BREACH_RATIO * target_hours - TIME_EPSILON {
                    SlaStatus::NearBreach
                } else {
                    SlaStatus::Pending
                };
                (elapsed, status)
            }
        };

        Ok(SlaEvaluation {
            status,
            elapsed_business_hours: elapsed,
            target_hours,
            remaining_hours: target_hours - elapsed,
        })
    }
}
