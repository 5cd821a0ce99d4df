use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use tracing::{info, warn};

use crate::models::{
    PriorityMetrics, SlaMetrics, SlaStatus, TatMetrics, TicketPriority, TicketSnapshot,
    TrendBucket,
};
use crate::services::evaluator::SlaEvaluator;

/// Batch statistics over a ticket set. A malformed ticket (timestamps
/// out of order) is skipped with a warning and never aborts the batch.
#[derive(Clone)]
pub struct MetricsAggregator {
    evaluator: SlaEvaluator,
}

impl MetricsAggregator {
    pub fn new(evaluator: SlaEvaluator) -> Self {
        Self { evaluator }
    }

    pub fn aggregate(&self, tickets: &[TicketSnapshot], now: NaiveDateTime) -> SlaMetrics {
        let overall = self.slice_metrics(tickets.iter(), now);

        let mut by_priority = HashMap::new();
        for priority in TicketPriority::ALL {
            let bucket = self.slice_metrics(
                tickets.iter().filter(|t| t.priority == priority),
                now,
            );
            by_priority.insert(priority, bucket);
        }

        info!(
            "Computed SLA metrics for {} tickets (compliance {:.1}%)",
            overall.total_tickets, overall.sla_compliance_rate
        );

        SlaMetrics {
            total_tickets: overall.total_tickets,
            avg_resolution_time: overall.avg_resolution_time,
            avg_first_response_time: overall.avg_first_response_time,
            sla_compliance_rate: overall.sla_compliance_rate,
            tat: overall.tat,
            by_priority,
        }
    }

    /// One trend bucket per calendar day in `[start_date, end_date]`.
    /// Created counts key off `created_at`, resolved counts and the
    /// resolution average off `resolved_at`, the response average off
    /// `first_response_at`.
    pub fn trend(
        &self,
        tickets: &[TicketSnapshot],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<TrendBucket> {
        let calculator = self.evaluator.calculator();
        let mut buckets = Vec::new();
        let mut day = start_date;
        while day <= end_date {
            let mut bucket = TrendBucket::empty(day);
            let mut response_times = Vec::new();
            let mut resolution_times = Vec::new();

            for ticket in tickets {
                if ticket.created_at.date() == day {
                    bucket.created += 1;
                }
                if let Some(first_response) = ticket.first_response_at {
                    if first_response.date() == day {
                        match calculator.elapsed_business_hours(ticket.created_at, first_response)
                        {
                            Ok(hours) => response_times.push(hours),
                            Err(e) => warn!("Skipping ticket {} in trend: {}", ticket.id, e),
                        }
                    }
                }
                if let Some(resolved) = ticket.resolved_at {
                    if resolved.date() == day {
                        bucket.resolved += 1;
                        match calculator.elapsed_business_hours(ticket.created_at, resolved) {
                            Ok(hours) => resolution_times.push(hours),
                            Err(e) => warn!("Skipping ticket {} in trend: {}", ticket.id, e),
                        }
                    }
                }
            }

            bucket.avg_first_response_time = mean(&response_times);
            bucket.avg_resolution_time = mean(&resolution_times);
            buckets.push(bucket);

            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        buckets
    }

    fn slice_metrics<'a>(
        &self,
        tickets: impl Iterator<Item = &'a TicketSnapshot>,
        now: NaiveDateTime,
    ) -> PriorityMetrics {
        let calculator = self.evaluator.calculator();

        let mut total: u64 = 0;
        let mut compliant: u64 = 0;
        let mut response_times = Vec::new();
        let mut resolution_times = Vec::new();
        let mut within_sla: u64 = 0;
        let mut exceeded_sla: u64 = 0;

        for ticket in tickets {
            total += 1;

            match self.evaluator.is_compliant(ticket, now) {
                Ok(true) => compliant += 1,
                Ok(false) => {}
                Err(e) => warn!("Ticket {} not countable for compliance: {}", ticket.id, e),
            }

            if let Some(first_response) = ticket.first_response_at {
                match calculator.elapsed_business_hours(ticket.created_at, first_response) {
                    Ok(hours) => response_times.push(hours),
                    Err(e) => warn!("Skipping response time for ticket {}: {}", ticket.id, e),
                }
            }

            if ticket.is_closed_out() {
                match self.evaluator.evaluate_resolution(ticket, now) {
                    Ok(eval) => {
                        resolution_times.push(eval.elapsed_business_hours);
                        if eval.status == SlaStatus::Breached {
                            exceeded_sla += 1;
                        } else {
                            within_sla += 1;
                        }
                    }
                    Err(e) => warn!("Skipping resolution time for ticket {}: {}", ticket.id, e),
                }
            }
        }

        let avg_resolution_time = mean(&resolution_times);
        let sla_compliance_rate = if total == 0 {
            0.0
        } else {
            compliant as f64 / total as f64 * 100.0
        };

        PriorityMetrics {
            total_tickets: total,
            avg_resolution_time,
            avg_first_response_time: mean(&response_times),
            sla_compliance_rate,
            tat: TatMetrics {
                within_sla,
                exceeded_sla,
                avg_tat: avg_resolution_time,
            },
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
