use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;

use crate::error::RiskError;

/// Risk classification derived from a position's health factor.
#[cw_serde]
#[derive(Copy, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    /// High liquidation risk
    Critical,
    /// Consider adding collateral
    Risky,
    /// Monitor the position
    Moderate,
    /// Position is healthy
    Safe,
}

impl RiskLevel {
    /// Display label for the classification.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Risky => "Risky",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Theme color keyed on the classification, for presentation layers.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "green",
            RiskLevel::Moderate => "amber",
            RiskLevel::Risky => "orange",
            RiskLevel::Critical => "red",
        }
    }
}

/// Health factor cut points for risk classification.
/// Each band is an inclusive lower bound: hf >= safe is Safe,
/// hf >= moderate is Moderate, hf >= risky is Risky, below that Critical.
#[cw_serde]
#[derive(Copy)]
pub struct RiskBands {
    /// Lower bound of the Safe band (e.g., 2.0)
    pub safe: Decimal,
    /// Lower bound of the Moderate band (e.g., 1.5)
    pub moderate: Decimal,
    /// Lower bound of the Risky band (e.g., 1.2)
    pub risky: Decimal,
}

impl RiskBands {
    /// Classify a health factor into a risk level.
    /// `None` is the no-debt sentinel and always classifies as Safe.
    /// Total over every finite non-negative health factor.
    pub fn classify(&self, health_factor: Option<Decimal>) -> RiskLevel {
        match health_factor {
            None => RiskLevel::Safe,
            Some(hf) => {
                if hf >= self.safe {
                    RiskLevel::Safe
                } else if hf >= self.moderate {
                    RiskLevel::Moderate
                } else if hf >= self.risky {
                    RiskLevel::Risky
                } else {
                    RiskLevel::Critical
                }
            }
        }
    }

    /// Validate that the cut points are positive and strictly descending.
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.risky > Decimal::zero()
            && self.safe > self.moderate
            && self.moderate > self.risky
        {
            Ok(())
        } else {
            Err(RiskError::InvalidRiskBands)
        }
    }
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            safe: Decimal::from_ratio(2u128, 1u128),
            moderate: Decimal::from_ratio(15u128, 10u128),
            risky: Decimal::from_ratio(12u128, 10u128),
        }
    }
}

/// Risk parameters fixed per deployment.
/// These are configuration, never derived from chain state.
#[cw_serde]
#[derive(Copy)]
pub struct RiskParams {
    /// Maximum loan-to-value ratio before a position becomes eligible
    /// for liquidation (e.g., 0.75 = 75%)
    pub liquidation_threshold: Decimal,
    /// Health factor below which the UI should surface a liquidation
    /// warning (e.g., 1.3)
    pub warning_threshold: Decimal,
    /// Classification cut points
    pub bands: RiskBands,
}

impl RiskParams {
    /// Validate all parameters.
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.liquidation_threshold.is_zero() || self.liquidation_threshold > Decimal::one() {
            return Err(RiskError::InvalidLiquidationThreshold);
        }
        if self.warning_threshold.is_zero() {
            return Err(RiskError::InvalidWarningThreshold);
        }
        self.bands.validate()
    }
}

impl Default for RiskParams {
    fn default() -> Self {
        Self {
            liquidation_threshold: Decimal::percent(75),
            warning_threshold: Decimal::from_ratio(13u128, 10u128),
            bands: RiskBands::default(),
        }
    }
}
