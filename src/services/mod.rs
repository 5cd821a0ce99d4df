pub mod alert_scanner;
pub mod business_hours;
pub mod calendar;
pub mod evaluator;
pub mod metrics_aggregator;

pub use alert_scanner::*;
pub use business_hours::*;
pub use calendar::*;
pub use evaluator::*;
pub use metrics_aggregator::*;
