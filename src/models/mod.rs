pub mod evaluation;
pub mod holiday;
pub mod metrics;
pub mod policy;
pub mod ticket;

pub use evaluation::*;
pub use holiday::*;
pub use metrics::*;
pub use policy::*;
pub use ticket::*;
