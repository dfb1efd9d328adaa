//! Router errors

use thiserror::Error;

/// Errors returned when dispatching a domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The requested name is not in the domain table
    #[error("unknown domain: {0}")]
    UnknownDomain(String),
}
