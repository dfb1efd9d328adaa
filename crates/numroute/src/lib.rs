//! numroute - Domain-routed numeric transforms
//!
//! This crate provides functionality to:
//! - Apply a unary numeric function to every element of a sequence
//! - Time a call and report elapsed milliseconds
//! - Compute a performance score over a sequence
//! - Dispatch one of a fixed set of named domain transforms

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use app::engine::{Timed, performance_score, process, timed};
pub use app::router::Router;
pub use constants::*;
pub use domain::transform::{Domain, Transform};
pub use error::RouterError;
