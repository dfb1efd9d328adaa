//! Engine and router constants

// =============================================================================
// Rounding
// =============================================================================

/// Decimal places kept by `performance_score`
pub const SCORE_DECIMALS: u32 = 3;

/// Decimal places kept for elapsed milliseconds reported by `timed`
pub const TIMING_DECIMALS: u32 = 3;

// =============================================================================
// Domain table
// =============================================================================

/// Domain name for the doubling transform
pub const ANALYTICS_DOMAIN: &str = "analytics";

/// Domain name for the squaring transform
pub const AI_DOMAIN: &str = "ai";

/// Domain name for the offset transform
pub const SIMULATION_DOMAIN: &str = "simulation";

/// Amount added by the simulation domain
pub const SIMULATION_OFFSET: f64 = 10.0;

/// Number of entries in the domain table
pub const DOMAIN_COUNT: usize = 3;

// =============================================================================
// Demo output
// =============================================================================

/// Banner printed by the demo CLI
pub const BANNER: [&str; 3] = [
    "==========================================",
    " numroute: domain-routed numeric engine",
    "==========================================",
];

/// Input sequence used by the demo CLI
pub const DEMO_VALUES: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
