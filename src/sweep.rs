// 📈 Comparison Sweeps - One-Axis Scenario Variation
// Varies a single input across a linear range from a base scenario and
// evaluates each point, producing chart-ready series for the shell

use crate::affordability::{RatioBand, RatioThresholds};
use crate::error::InvalidInputError;
use crate::scenario::{evaluate_scenario, Scenario};
use serde::{Deserialize, Serialize};

/// Property tax estimate used when the swept price makes the base scenario's
/// fixed tax figure stale: 1% of price per year
pub const PRICE_SWEEP_TAX_RATE: f64 = 0.01;

/// Insurance estimate for price sweeps: 0.3% of price per year
pub const PRICE_SWEEP_INSURANCE_RATE: f64 = 0.003;

/// Default number of points per sweep
pub const DEFAULT_SWEEP_STEPS: usize = 10;

// ============================================================================
// SWEEP REQUEST
// ============================================================================

/// The input being varied, with its inclusive range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "axis", rename_all = "snake_case")]
pub enum SweepAxis {
    HomePrice { min: f64, max: f64 },
    InterestRate { min: f64, max: f64 },
    DownPaymentPct { min: f64, max: f64 },
}

impl SweepAxis {
    pub fn label(&self) -> &str {
        match self {
            SweepAxis::HomePrice { .. } => "Home Price",
            SweepAxis::InterestRate { .. } => "Interest Rate",
            SweepAxis::DownPaymentPct { .. } => "Down Payment %",
        }
    }

    fn range(&self) -> (f64, f64) {
        match self {
            SweepAxis::HomePrice { min, max }
            | SweepAxis::InterestRate { min, max }
            | SweepAxis::DownPaymentPct { min, max } => (*min, *max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRequest {
    pub base: Scenario,
    #[serde(flatten)]
    pub axis: SweepAxis,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

fn default_steps() -> usize {
    DEFAULT_SWEEP_STEPS
}

// ============================================================================
// SWEEP POINT
// ============================================================================

/// One evaluated point along the sweep axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    /// The swept input's value at this point
    pub value: f64,
    pub total_monthly_payment: f64,
    pub front_end_ratio: f64,
    pub front_end_band: RatioBand,
    pub affordable: bool,
}

// ============================================================================
// SWEEP
// ============================================================================

/// Evaluate the base scenario at evenly spaced values of one input.
///
/// Price sweeps re-estimate property tax and insurance as fractions of the
/// swept price, so a cheap and an expensive house each carry plausible
/// carrying costs rather than the base scenario's fixed figures.
///
/// The range itself must stay inside the input's documented domain; an
/// out-of-domain point fails the whole sweep, since every point derives
/// from the same caller-supplied base.
pub fn sweep(
    request: &SweepRequest,
    thresholds: &RatioThresholds,
) -> Result<Vec<SweepPoint>, InvalidInputError> {
    if request.steps < 2 {
        return Err(InvalidInputError::new("steps", "must be >= 2"));
    }

    let (min, max) = request.axis.range();
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(InvalidInputError::new("axis", "range must be finite with min <= max"));
    }

    let mut points = Vec::with_capacity(request.steps);

    for i in 0..request.steps {
        let value = min + (max - min) * i as f64 / (request.steps - 1) as f64;

        let mut scenario = request.base.clone();
        match request.axis {
            SweepAxis::HomePrice { .. } => {
                scenario.loan.home_price = value;
                scenario.loan.annual_property_tax = value * PRICE_SWEEP_TAX_RATE;
                scenario.loan.annual_insurance = value * PRICE_SWEEP_INSURANCE_RATE;
            }
            SweepAxis::InterestRate { .. } => {
                scenario.loan.annual_interest_rate_pct = value;
            }
            SweepAxis::DownPaymentPct { .. } => {
                scenario.loan.down_payment_pct = value;
            }
        }

        let metrics = evaluate_scenario(&scenario, thresholds)?;
        points.push(SweepPoint {
            value,
            total_monthly_payment: metrics.loan.total_monthly_payment,
            front_end_ratio: metrics.affordability.front_end_ratio,
            front_end_band: metrics.affordability.front_end_band,
            affordable: metrics.affordability.is_affordable(),
        });
    }

    Ok(points)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affordability::AffordabilityInputs;
    use crate::loan::LoanInputs;

    fn base_scenario() -> Scenario {
        Scenario {
            name: "base".to_string(),
            loan: LoanInputs {
                home_price: 400_000.0,
                down_payment_pct: 0.20,
                annual_interest_rate_pct: 6.0,
                term_years: 30,
                annual_property_tax: 4_800.0,
                annual_insurance: 1_200.0,
                monthly_hoa: 0.0,
                pmi_annual_pct: 0.5,
            },
            affordability: AffordabilityInputs {
                monthly_gross_income: 9_000.0,
                monthly_non_housing_debt: 300.0,
            },
        }
    }

    #[test]
    fn test_price_sweep_endpoints_and_count() {
        let request = SweepRequest {
            base: base_scenario(),
            axis: SweepAxis::HomePrice {
                min: 300_000.0,
                max: 500_000.0,
            },
            steps: 10,
        };

        let points = sweep(&request, &RatioThresholds::default()).unwrap();

        assert_eq!(points.len(), 10);
        assert_eq!(points[0].value, 300_000.0);
        assert_eq!(points[9].value, 500_000.0);
    }

    #[test]
    fn test_price_sweep_payments_increase() {
        let request = SweepRequest {
            base: base_scenario(),
            axis: SweepAxis::HomePrice {
                min: 250_000.0,
                max: 750_000.0,
            },
            steps: 10,
        };

        let points = sweep(&request, &RatioThresholds::default()).unwrap();

        for pair in points.windows(2) {
            assert!(pair[1].total_monthly_payment > pair[0].total_monthly_payment);
            assert!(pair[1].front_end_ratio > pair[0].front_end_ratio);
        }
    }

    #[test]
    fn test_price_sweep_reestimates_carrying_costs() {
        let request = SweepRequest {
            base: base_scenario(),
            axis: SweepAxis::HomePrice {
                min: 600_000.0,
                max: 600_000.0,
            },
            steps: 2,
        };

        let points = sweep(&request, &RatioThresholds::default()).unwrap();

        // 1% tax + 0.3% insurance of the swept price, monthly
        let expected_tax_and_insurance = 600_000.0 * (0.01 + 0.003) / 12.0;
        let loan = crate::loan::compute_loan(&LoanInputs {
            home_price: 600_000.0,
            down_payment_pct: 0.20,
            annual_interest_rate_pct: 6.0,
            term_years: 30,
            annual_property_tax: 6_000.0,
            annual_insurance: 1_800.0,
            monthly_hoa: 0.0,
            pmi_annual_pct: 0.5,
        })
        .unwrap();

        assert!((loan.monthly_tax + loan.monthly_insurance - expected_tax_and_insurance).abs() < 1e-9);
        assert!((points[0].total_monthly_payment - loan.total_monthly_payment).abs() < 1e-9);
    }

    #[test]
    fn test_rate_sweep_payments_increase() {
        let request = SweepRequest {
            base: base_scenario(),
            axis: SweepAxis::InterestRate { min: 3.0, max: 9.0 },
            steps: 7,
        };

        let points = sweep(&request, &RatioThresholds::default()).unwrap();

        assert_eq!(points.len(), 7);
        for pair in points.windows(2) {
            assert!(pair[1].total_monthly_payment > pair[0].total_monthly_payment);
        }
    }

    #[test]
    fn test_down_payment_sweep_payments_decrease() {
        let request = SweepRequest {
            base: base_scenario(),
            axis: SweepAxis::DownPaymentPct { min: 0.05, max: 0.35 },
            steps: 7,
        };

        let points = sweep(&request, &RatioThresholds::default()).unwrap();

        for pair in points.windows(2) {
            assert!(pair[1].total_monthly_payment < pair[0].total_monthly_payment);
        }
    }

    #[test]
    fn test_out_of_domain_range_fails_whole_sweep() {
        let request = SweepRequest {
            base: base_scenario(),
            axis: SweepAxis::DownPaymentPct { min: 0.5, max: 1.0 },
            steps: 3,
        };

        let err = sweep(&request, &RatioThresholds::default()).unwrap_err();
        assert_eq!(err.field, "down_payment_pct");
    }

    #[test]
    fn test_too_few_steps_rejected() {
        let request = SweepRequest {
            base: base_scenario(),
            axis: SweepAxis::InterestRate { min: 5.0, max: 6.0 },
            steps: 1,
        };

        let err = sweep(&request, &RatioThresholds::default()).unwrap_err();
        assert_eq!(err.field, "steps");
    }

    #[test]
    fn test_sweep_request_json_shape() {
        let json = r#"{
            "base": {
                "name": "base",
                "loan": {
                    "home_price": 400000,
                    "down_payment_pct": 0.2,
                    "annual_interest_rate_pct": 6.0,
                    "term_years": 30
                },
                "affordability": { "monthly_gross_income": 9000 }
            },
            "axis": "interest_rate",
            "min": 4.0,
            "max": 8.0
        }"#;

        let request: SweepRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.steps, DEFAULT_SWEEP_STEPS);
        assert_eq!(request.axis, SweepAxis::InterestRate { min: 4.0, max: 8.0 });
    }
}
