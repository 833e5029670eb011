// Home Affordability Engine - Core Library
// Exposes the calculation engine for use in the CLI, web shell, and tests

pub mod error;
pub mod loan;
pub mod affordability;
pub mod scenario;
pub mod sweep;

// Re-export commonly used types
pub use error::InvalidInputError;
pub use loan::{compute_loan, LoanInputs, LoanResult, PMI_DOWN_PAYMENT_CUTOFF};
pub use affordability::{
    evaluate, AffordabilityInputs, AffordabilityResult, RatioBand, RatioThresholds,
};
pub use scenario::{
    compare_scenarios, evaluate_scenario, Scenario, ScenarioMetrics, ScenarioOutcome,
};
pub use sweep::{
    sweep, SweepAxis, SweepPoint, SweepRequest, DEFAULT_SWEEP_STEPS,
    PRICE_SWEEP_INSURANCE_RATE, PRICE_SWEEP_TAX_RATE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
