use cosmwasm_std::{Decimal, Decimal256};

/// Widen a Decimal to Decimal256 for intermediate calculations.
/// Multiply-then-divide chains on large token amounts can exceed the
/// Decimal range even when the final result fits.
pub(crate) fn widen(value: Decimal) -> Decimal256 {
    Decimal256::from(value)
}

/// Narrow a Decimal256 back to Decimal, saturating at Decimal::MAX.
/// The evaluator is advisory and total: a result too large to display
/// is reported as the largest representable value, never an error.
pub(crate) fn narrow_saturating(value: Decimal256) -> Decimal {
    Decimal::try_from(value).unwrap_or(Decimal::MAX)
}
