#![allow(unused_imports)]
pub mod engine_helpers;

pub use engine_helpers::*;
