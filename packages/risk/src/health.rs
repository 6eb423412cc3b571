use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;

use tapir_types::{Position, RiskBands, RiskError, RiskLevel, RiskParams};

use crate::math256::{narrow_saturating, widen};

/// A position snapshot evaluated against the deployment's risk parameters.
/// This is the single source of truth for risk calculations; presentation
/// components consume it instead of re-deriving the formulas inline.
///
/// Every method is a pure function over the captured values: no I/O, no
/// shared state, total over all representable inputs. The numbers are
/// advisory for display and pre-submission checks; liquidation itself is
/// enforced by the smart contracts, never by this module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionHealth {
    /// Collateral asset supplied
    pub collateral: Decimal,
    /// Debt asset owed
    pub borrowed: Decimal,
    /// Maximum LTV before liquidation eligibility
    pub liquidation_threshold: Decimal,
    /// Health factor below which a warning should be surfaced
    pub warning_threshold: Decimal,
    /// Classification cut points
    pub bands: RiskBands,
}

impl PositionHealth {
    /// Evaluate a confirmed position snapshot under the given parameters.
    pub fn new(position: Position, params: &RiskParams) -> Self {
        Self {
            collateral: position.collateral,
            borrowed: position.borrowed,
            liquidation_threshold: params.liquidation_threshold,
            warning_threshold: params.warning_threshold,
            bands: params.bands,
        }
    }

    /// The underlying position snapshot.
    pub fn position(&self) -> Position {
        Position::new(self.collateral, self.borrowed)
    }

    /// Loan-to-value ratio: borrowed / collateral.
    /// Zero collateral yields zero: an account with nothing supplied is
    /// inactive, not infinitely levered. Results beyond the Decimal range
    /// saturate at Decimal::MAX.
    pub fn ltv(&self) -> Decimal {
        if self.collateral.is_zero() {
            return Decimal::zero();
        }

        match widen(self.borrowed).checked_div(widen(self.collateral)) {
            Ok(ratio) => narrow_saturating(ratio),
            Err(_) => Decimal::MAX,
        }
    }

    /// Health factor: (collateral * liquidation_threshold) / borrowed.
    /// Returns None when there is no debt (cannot be liquidated).
    pub fn health_factor(&self) -> Option<Decimal> {
        if self.borrowed.is_zero() {
            return None;
        }

        let weighted = widen(self.collateral).saturating_mul(widen(self.liquidation_threshold));
        match weighted.checked_div(widen(self.borrowed)) {
            Ok(hf) => Some(narrow_saturating(hf)),
            Err(_) => Some(Decimal::MAX),
        }
    }

    /// Classify the position's health factor into a risk level.
    pub fn risk_level(&self) -> RiskLevel {
        self.bands.classify(self.health_factor())
    }

    /// Whether the position is past the liquidation boundary (hf < 1.0).
    /// Advisory: the contract decides actual liquidation eligibility.
    pub fn is_liquidatable(&self) -> bool {
        match self.health_factor() {
            Some(hf) => hf < Decimal::one(),
            None => false,
        }
    }

    /// Whether the UI should surface a liquidation warning banner.
    pub fn needs_liquidation_warning(&self) -> bool {
        match self.health_factor() {
            Some(hf) => hf < self.warning_threshold,
            None => false,
        }
    }

    /// Collateral price (in debt units) at which the position crosses the
    /// liquidation threshold: borrowed / (collateral * threshold).
    /// Returns None when there is no debt or no collateral.
    pub fn liquidation_price(&self) -> Option<Decimal> {
        if self.borrowed.is_zero() || self.collateral.is_zero() {
            return None;
        }

        let denominator = widen(self.collateral).saturating_mul(widen(self.liquidation_threshold));
        match widen(self.borrowed).checked_div(denominator) {
            Ok(price) => Some(narrow_saturating(price)),
            Err(_) => Some(Decimal::MAX),
        }
    }

    /// Additional debt the position can take on without crossing the
    /// threshold: max(0, collateral * threshold - borrowed). Never negative.
    pub fn max_safe_borrow(&self) -> Decimal {
        self.collateral
            .saturating_mul(self.liquidation_threshold)
            .saturating_sub(self.borrowed)
    }

    /// Gate a borrow before submission. Errors with the safe limit when
    /// the requested amount exceeds it; the caller surfaces the message
    /// and withholds the transaction.
    pub fn check_borrow_allowed(&self, amount: Decimal) -> Result<(), RiskError> {
        let max_safe = self.max_safe_borrow();
        if amount > max_safe {
            return Err(RiskError::ExceedsSafeBorrow {
                max_safe: max_safe.to_string(),
                requested: amount.to_string(),
            });
        }

        Ok(())
    }

    /// Flatten the evaluation into the dashboard's display fields.
    pub fn summary(&self) -> PositionSummary {
        let level = self.risk_level();
        PositionSummary {
            collateral: self.collateral,
            borrowed: self.borrowed,
            ltv: self.ltv(),
            health_factor: self.health_factor(),
            risk_level: level,
            risk_label: level.label().to_string(),
            risk_color: level.color().to_string(),
            max_safe_borrow: self.max_safe_borrow(),
            liquidation_price: self.liquidation_price(),
            needs_liquidation_warning: self.needs_liquidation_warning(),
        }
    }
}

/// Everything a dashboard needs to render one position, in one shape.
#[cw_serde]
pub struct PositionSummary {
    pub collateral: Decimal,
    pub borrowed: Decimal,
    pub ltv: Decimal,
    /// None means no debt: the position cannot be liquidated
    pub health_factor: Option<Decimal>,
    pub risk_level: RiskLevel,
    pub risk_label: String,
    pub risk_color: String,
    pub max_safe_borrow: Decimal,
    pub liquidation_price: Option<Decimal>,
    pub needs_liquidation_warning: bool,
}
