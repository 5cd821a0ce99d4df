pub mod config;
pub mod domain;
pub mod models;
pub mod services;

pub use config::*;
pub use domain::errors::{SlaError, SlaResult};
pub use models::*;
pub use services::*;
