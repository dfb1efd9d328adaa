//! Application layer - Engine and router use cases
//!
//! This module coordinates domain logic with timing and table dispatch.

pub mod engine;
pub mod router;
