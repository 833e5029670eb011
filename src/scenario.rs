// 🔀 Scenario Comparison - Batch Evaluation
// Runs the loan calculator and affordability evaluator over a caller-supplied
// list of named scenarios, isolating failures per scenario

use crate::affordability::{evaluate, AffordabilityInputs, AffordabilityResult, RatioThresholds};
use crate::error::InvalidInputError;
use crate::loan::{compute_loan, LoanInputs, LoanResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// SCENARIO
// ============================================================================

/// One named purchase alternative. Scenarios are independent values and
/// share no state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub loan: LoanInputs,
    pub affordability: AffordabilityInputs,
}

/// Engine outputs for one successfully evaluated scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioMetrics {
    pub loan: LoanResult,
    pub affordability: AffordabilityResult,
}

/// One row of a comparison: the scenario plus its metrics or its error.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub outcome: Result<ScenarioMetrics, InvalidInputError>,
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Run the full pipeline for one scenario: loan breakdown, then ratios.
pub fn evaluate_scenario(
    scenario: &Scenario,
    thresholds: &RatioThresholds,
) -> Result<ScenarioMetrics, InvalidInputError> {
    let loan = compute_loan(&scenario.loan)?;
    let affordability = evaluate(&loan, &scenario.affordability, thresholds)?;

    Ok(ScenarioMetrics { loan, affordability })
}

/// Evaluate every scenario independently, in input order. A failure on one
/// scenario is recorded in its outcome and never aborts the rest.
pub fn compare_scenarios(
    scenarios: &[Scenario],
    thresholds: &RatioThresholds,
) -> Vec<ScenarioOutcome> {
    scenarios
        .iter()
        .map(|scenario| ScenarioOutcome {
            scenario: scenario.clone(),
            outcome: evaluate_scenario(scenario, thresholds),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
