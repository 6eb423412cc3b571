use std::str::FromStr;

use cosmwasm_std::Decimal;

use tapir_types::Action;

use crate::health::PositionHealth;

impl PositionHealth {
    /// Project a hypothetical transaction against this position.
    ///
    /// Deposit adds collateral, borrow adds debt, repay subtracts debt
    /// saturating at zero (entering more than owed means closing the debt,
    /// not an error). The input position is untouched; callers compare
    /// before and after. A zero amount returns the position unchanged.
    pub fn project(&self, action: Action, amount: Decimal) -> Self {
        let mut next = *self;
        match action {
            Action::Deposit => next.collateral = self.collateral.saturating_add(amount),
            Action::Borrow => next.borrowed = self.borrowed.saturating_add(amount),
            Action::Repay => next.borrowed = self.borrowed.saturating_sub(amount),
        }
        next
    }

    /// Project from a raw amount field as the user types it.
    ///
    /// Called on every keystroke, so a partially-typed or invalid amount
    /// ("", ".", "abc", "-5") is a no-op projection rather than an error.
    pub fn project_input(&self, action: Action, raw: &str) -> Self {
        match Decimal::from_str(raw.trim()) {
            Ok(amount) => self.project(action, amount),
            Err(_) => *self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::Decimal;
    use tapir_testing::{default_risk_params, position};
    use tapir_types::RiskLevel;

    fn evaluate(collateral: u128, borrowed: u128) -> PositionHealth {
        PositionHealth::new(position(collateral, borrowed), &default_risk_params())
    }

    fn dec(value: u128) -> Decimal {
        Decimal::from_ratio(value, 1u128)
    }

    #[test]
    fn test_project_deposit_adds_collateral() {
        let before = evaluate(1000, 500);
        let after = before.project(Action::Deposit, dec(500));

        assert_eq!(after.collateral, dec(1500));
        assert_eq!(after.borrowed, before.borrowed);
        // hf rises from 1.5 to 1125/500 = 2.25
        assert_eq!(
            after.health_factor(),
            Some(Decimal::from_ratio(225u128, 100u128))
        );
        assert_eq!(after.risk_level(), RiskLevel::Safe);
    }

    #[test]
    fn test_project_borrow_adds_debt() {
        let before = evaluate(1000, 500);
        let after = before.project(Action::Borrow, dec(100));

        assert_eq!(after.borrowed, dec(600));
        assert_eq!(after.collateral, before.collateral);
        assert!(after.health_factor() < before.health_factor());
    }

    #[test]
    fn test_project_repay_reduces_debt() {
        let before = evaluate(1000, 500);
        let after = before.project(Action::Repay, dec(200));

        assert_eq!(after.borrowed, dec(300));
    }

    #[test]
    fn test_project_repay_clamps_at_zero() {
        // Repaying more than owed closes the debt entirely
        let before = evaluate(1000, 500);
        let after = before.project(Action::Repay, dec(9999));

        assert_eq!(after.borrowed, Decimal::zero());
        assert_eq!(after.health_factor(), None);
        assert_eq!(after.risk_level(), RiskLevel::Safe);
    }

    #[test]
    fn test_project_zero_amount_is_identity() {
        let before = evaluate(1000, 500);
        for action in [Action::Deposit, Action::Borrow, Action::Repay] {
            let after = before.project(action, Decimal::zero());
            assert_eq!(after, before);
        }
    }

    #[test]
    fn test_project_does_not_mutate_input() {
        let before = evaluate(1000, 500);
        let _ = before.project(Action::Borrow, dec(100));

        assert_eq!(before.collateral, dec(1000));
        assert_eq!(before.borrowed, dec(500));
    }

    #[test]
    fn test_project_borrow_to_max_lands_on_threshold() {
        // Borrowing exactly max_safe_borrow drives LTV to exactly the
        // liquidation threshold and the health factor to exactly 1.0
        let before = evaluate(1000, 500);
        let max = before.max_safe_borrow();
        assert_eq!(max, dec(250));

        let after = before.project(Action::Borrow, max);
        assert_eq!(after.ltv(), Decimal::percent(75));
        assert_eq!(after.health_factor(), Some(Decimal::one()));
        assert!(!after.is_liquidatable());
    }

    #[test]
    fn test_project_input_parses_amounts() {
        let before = evaluate(1000, 500);

        let after = before.project_input(Action::Borrow, "100");
        assert_eq!(after.borrowed, dec(600));

        let after = before.project_input(Action::Deposit, "12.5");
        assert_eq!(
            after.collateral,
            dec(1000) + Decimal::from_ratio(125u128, 10u128)
        );

        let after = before.project_input(Action::Repay, " 250 ");
        assert_eq!(after.borrowed, dec(250));
    }

    #[test]
    fn test_project_input_noop_on_partial_or_invalid_input() {
        let before = evaluate(1000, 500);

        for raw in ["", ".", "abc", "-5", "1.2.3", "1e5"] {
            let after = before.project_input(Action::Borrow, raw);
            assert_eq!(after, before, "input {:?} should be a no-op", raw);
        }
    }
}
