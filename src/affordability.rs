// 📊 Affordability Evaluator - DTI Ratios + Guideline Classification
// Front-end and back-end debt-to-income ratios, each classified against
// named, overridable guideline thresholds

use crate::error::InvalidInputError;
use crate::loan::LoanResult;
use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// AFFORDABILITY INPUTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityInputs {
    /// Gross monthly income, must be > 0
    pub monthly_gross_income: f64,

    /// Monthly debt obligations other than housing (car, cards, loans), >= 0
    #[serde(default)]
    pub monthly_non_housing_debt: f64,
}

impl AffordabilityInputs {
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if !self.monthly_gross_income.is_finite() || self.monthly_gross_income <= 0.0 {
            return Err(InvalidInputError::new("monthly_gross_income", "must be > 0"));
        }

        if !self.monthly_non_housing_debt.is_finite() || self.monthly_non_housing_debt < 0.0 {
            return Err(InvalidInputError::new("monthly_non_housing_debt", "must be >= 0"));
        }

        Ok(())
    }
}

// ============================================================================
// RATIO BANDS
// ============================================================================

/// Three-level ordinal classification of a debt-to-income ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RatioBand {
    Good,
    Caution,
    Unaffordable,
}

impl RatioBand {
    pub fn name(&self) -> &str {
        match self {
            RatioBand::Good => "Good",
            RatioBand::Caution => "Caution",
            RatioBand::Unaffordable => "Unaffordable",
        }
    }
}

// ============================================================================
// GUIDELINE THRESHOLDS
// ============================================================================

/// Lender-guideline DTI thresholds. Defaults follow the conventional
/// 28/36 rule with a caution band up to 33/43. Override per call or load
/// alternates from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioThresholds {
    /// Front-end ratio at or below this is Good
    #[serde(default = "default_front_end_good_max")]
    pub front_end_good_max: f64,

    /// Front-end ratio above good but at or below this is Caution
    #[serde(default = "default_front_end_caution_max")]
    pub front_end_caution_max: f64,

    /// Back-end ratio at or below this is Good
    #[serde(default = "default_back_end_good_max")]
    pub back_end_good_max: f64,

    /// Back-end ratio above good but at or below this is Caution
    #[serde(default = "default_back_end_caution_max")]
    pub back_end_caution_max: f64,
}

fn default_front_end_good_max() -> f64 {
    0.28
}

fn default_front_end_caution_max() -> f64 {
    0.33
}

fn default_back_end_good_max() -> f64 {
    0.36
}

fn default_back_end_caution_max() -> f64 {
    0.43
}

impl Default for RatioThresholds {
    fn default() -> Self {
        RatioThresholds {
            front_end_good_max: default_front_end_good_max(),
            front_end_caution_max: default_front_end_caution_max(),
            back_end_good_max: default_back_end_good_max(),
            back_end_caution_max: default_back_end_caution_max(),
        }
    }
}

impl RatioThresholds {
    /// Load threshold overrides from a JSON file. Missing fields fall back
    /// to the 28/33/36/43 defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read thresholds file: {:?}", path.as_ref()))?;

        let thresholds: RatioThresholds =
            serde_json::from_str(&content).context("Failed to parse thresholds JSON")?;

        if thresholds.front_end_good_max > thresholds.front_end_caution_max
            || thresholds.back_end_good_max > thresholds.back_end_caution_max
        {
            anyhow::bail!("Thresholds out of order: good band must not exceed caution band");
        }

        Ok(thresholds)
    }

    pub fn classify_front_end(&self, ratio: f64) -> RatioBand {
        classify(ratio, self.front_end_good_max, self.front_end_caution_max)
    }

    pub fn classify_back_end(&self, ratio: f64) -> RatioBand {
        classify(ratio, self.back_end_good_max, self.back_end_caution_max)
    }
}

/// Bands are closed on the lower side: a ratio exactly at a boundary
/// falls in the lower (better) band.
fn classify(ratio: f64, good_max: f64, caution_max: f64) -> RatioBand {
    if ratio <= good_max {
        RatioBand::Good
    } else if ratio <= caution_max {
        RatioBand::Caution
    } else {
        RatioBand::Unaffordable
    }
}

// ============================================================================
// AFFORDABILITY RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    /// Housing cost (P&I + tax + insurance + PMI + HOA) / gross income
    pub front_end_ratio: f64,
    /// (Housing cost + other debt) / gross income
    pub back_end_ratio: f64,

    pub front_end_band: RatioBand,
    pub back_end_band: RatioBand,
}

impl AffordabilityResult {
    /// Conventional affordability verdict: both ratios in the Good band.
    pub fn is_affordable(&self) -> bool {
        self.front_end_band == RatioBand::Good && self.back_end_band == RatioBand::Good
    }
}

// ============================================================================
// AFFORDABILITY EVALUATOR
// ============================================================================

pub fn evaluate(
    loan: &LoanResult,
    afford: &AffordabilityInputs,
    thresholds: &RatioThresholds,
) -> Result<AffordabilityResult, InvalidInputError> {
    afford.validate()?;

    let housing = loan.monthly_tax
        + loan.monthly_insurance
        + loan.monthly_pmi
        + loan.monthly_hoa
        + loan.monthly_principal_interest;

    let front_end_ratio = housing / afford.monthly_gross_income;
    let back_end_ratio =
        (loan.total_monthly_payment + afford.monthly_non_housing_debt) / afford.monthly_gross_income;

    Ok(AffordabilityResult {
        front_end_ratio,
        back_end_ratio,
        front_end_band: thresholds.classify_front_end(front_end_ratio),
        back_end_band: thresholds.classify_back_end(back_end_ratio),
    })
}

// ============================================================================
// TESTS
// ============================================================================
