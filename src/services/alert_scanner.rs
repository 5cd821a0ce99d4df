use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::models::{SlaAlert, TicketSnapshot};
use crate::services::evaluator::SlaEvaluator;

/// Scans open tickets for approaching resolution deadlines. Alerts are
/// forward-looking: a ticket already past due is left to the breach
/// report rather than alerted on.
#[derive(Clone)]
pub struct AlertScanner {
    evaluator: SlaEvaluator,
}

impl AlertScanner {
    pub fn new(evaluator: SlaEvaluator) -> Self {
        Self { evaluator }
    }

    /// Emits one alert per open/in-progress ticket whose remaining
    /// resolution budget is positive but within `lead_hours`.
    pub fn scan_near_breach(
        &self,
        tickets: &[TicketSnapshot],
        lead_hours: f64,
        now: NaiveDateTime,
    ) -> Vec<SlaAlert> {
        let mut alerts = Vec::new();

        for ticket in tickets {
            if !ticket.status.is_active() {
                continue;
            }

            let remaining = match self.evaluator.remaining_resolution_hours(ticket, now) {
                Ok(remaining) => remaining,
                Err(e) => {
                    warn!("Skipping ticket {} in near-breach scan: {}", ticket.id, e);
                    continue;
                }
            };

            if remaining > 0.0 && remaining <= lead_hours {
                alerts.push(SlaAlert {
                    ticket_id: ticket.id.clone(),
                    priority: ticket.priority,
                    remaining_hours: remaining,
                    created_at: ticket.created_at,
                });
            }
        }

        info!(
            "Near-breach scan: {} alert(s) from {} ticket(s) within {} lead hours",
            alerts.len(),
            tickets.len(),
            lead_hours
        );

        alerts
    }
}
