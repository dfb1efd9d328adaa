//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and value types without clocks or I/O.

pub mod rounding;
pub mod score;
pub mod transform;
