// 🏠 Loan Calculator - Payment Math + Cost Breakdown
// Converts price/rate/term into a fixed monthly payment and an itemized
// monthly housing cost (P&I, tax, insurance, PMI, HOA)

use crate::error::InvalidInputError;
use serde::{Deserialize, Serialize};

/// Down-payment fraction at or above which PMI no longer applies
pub const PMI_DOWN_PAYMENT_CUTOFF: f64 = 0.20;

// ============================================================================
// LOAN INPUTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Purchase price, must be > 0
    pub home_price: f64,

    /// Down payment as a fraction of home price, in [0, 1)
    pub down_payment_pct: f64,

    /// Annual interest rate in percent (6.0 = 6%), >= 0
    pub annual_interest_rate_pct: f64,

    /// Loan term in years, > 0 (typically 15/20/30)
    pub term_years: u32,

    /// Annual property tax, >= 0
    #[serde(default)]
    pub annual_property_tax: f64,

    /// Annual homeowner's insurance, >= 0
    #[serde(default)]
    pub annual_insurance: f64,

    /// Monthly HOA dues, >= 0
    #[serde(default)]
    pub monthly_hoa: f64,

    /// Annual PMI rate in percent of loan amount, >= 0.
    /// Only applied when down_payment_pct < 0.20.
    #[serde(default)]
    pub pmi_annual_pct: f64,
}

impl LoanInputs {
    /// Check every field against its documented constraint.
    /// First violation wins; the engine never clamps.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if !self.home_price.is_finite() || self.home_price <= 0.0 {
            return Err(InvalidInputError::new("home_price", "must be > 0"));
        }

        if !self.down_payment_pct.is_finite()
            || self.down_payment_pct < 0.0
            || self.down_payment_pct >= 1.0
        {
            return Err(InvalidInputError::new("down_payment_pct", "must be in [0, 1)"));
        }

        if !self.annual_interest_rate_pct.is_finite() || self.annual_interest_rate_pct < 0.0 {
            return Err(InvalidInputError::new("annual_interest_rate_pct", "must be >= 0"));
        }

        if self.term_years == 0 {
            return Err(InvalidInputError::new("term_years", "must be > 0"));
        }

        if !self.annual_property_tax.is_finite() || self.annual_property_tax < 0.0 {
            return Err(InvalidInputError::new("annual_property_tax", "must be >= 0"));
        }

        if !self.annual_insurance.is_finite() || self.annual_insurance < 0.0 {
            return Err(InvalidInputError::new("annual_insurance", "must be >= 0"));
        }

        if !self.monthly_hoa.is_finite() || self.monthly_hoa < 0.0 {
            return Err(InvalidInputError::new("monthly_hoa", "must be >= 0"));
        }

        if !self.pmi_annual_pct.is_finite() || self.pmi_annual_pct < 0.0 {
            return Err(InvalidInputError::new("pmi_annual_pct", "must be >= 0"));
        }

        Ok(())
    }
}

// ============================================================================
// LOAN RESULT
// ============================================================================

/// Itemized monthly housing cost plus lifetime totals.
/// All fields carry full floating precision; rounding is a shell concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub loan_amount: f64,
    pub down_payment: f64,

    pub monthly_principal_interest: f64,
    pub monthly_tax: f64,
    pub monthly_insurance: f64,
    /// Exactly 0.0 when down_payment_pct >= 0.20, never omitted
    pub monthly_pmi: f64,
    pub monthly_hoa: f64,

    /// Exact sum of the five monthly components above
    pub total_monthly_payment: f64,

    /// P&I paid over the full term
    pub total_paid: f64,
    /// total_paid - loan_amount
    pub total_interest: f64,
}

// ============================================================================
// LOAN CALCULATOR
// ============================================================================

/// Compute the monthly cost breakdown for a fixed-rate mortgage.
///
/// Standard amortization formula:
///   M = L * r * (1+r)^n / ((1+r)^n - 1)
/// with r the monthly rate and n the number of payments. When r == 0 the
/// payment degenerates to straight principal, L / n.
pub fn compute_loan(inputs: &LoanInputs) -> Result<LoanResult, InvalidInputError> {
    inputs.validate()?;

    let loan_amount = inputs.home_price * (1.0 - inputs.down_payment_pct);
    let down_payment = inputs.home_price * inputs.down_payment_pct;

    let n = inputs.term_years as f64 * 12.0;
    let r = inputs.annual_interest_rate_pct / 100.0 / 12.0;

    let monthly_principal_interest = if r == 0.0 {
        loan_amount / n
    } else {
        let growth = (1.0 + r).powf(n);
        loan_amount * r * growth / (growth - 1.0)
    };

    let monthly_tax = inputs.annual_property_tax / 12.0;
    let monthly_insurance = inputs.annual_insurance / 12.0;
    let monthly_pmi = if inputs.down_payment_pct < PMI_DOWN_PAYMENT_CUTOFF {
        loan_amount * inputs.pmi_annual_pct / 100.0 / 12.0
    } else {
        0.0
    };
    let monthly_hoa = inputs.monthly_hoa;

    // One fixed summation order: identical inputs give bit-identical totals
    let total_monthly_payment =
        monthly_principal_interest + monthly_tax + monthly_insurance + monthly_pmi + monthly_hoa;

    let total_paid = monthly_principal_interest * n;
    let total_interest = total_paid - loan_amount;

    Ok(LoanResult {
        loan_amount,
        down_payment,
        monthly_principal_interest,
        monthly_tax,
        monthly_insurance,
        monthly_pmi,
        monthly_hoa,
        total_monthly_payment,
        total_paid,
        total_interest,
    })
}

// ============================================================================
// TESTS
// ============================================================================
