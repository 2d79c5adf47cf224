use rust_decimal::Decimal;

use crate::error::{Result, SplitError};
use crate::precision::Precision;

/// `0.01`
const ONE_PERCENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Number of legs the one-percent value is divided into.
const LEG_COUNT: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// One percent of a balance and its three legs, all rounded to the same
/// precision.
///
/// `legs[0] + legs[1] + legs[2] == one_percent` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitResult {
    pub one_percent: Decimal,
    pub legs: [Decimal; 3],
}

/// Compute one percent of `balance` and split it into three legs.
///
/// The one-percent value is rounded half-up to `precision`. Each leg starts
/// as the same rounded third; whatever rounding left over is then moved onto
/// the first leg one unit at a time, so legs two and three are always equal.
///
/// Every sum is checked to stay at `precision`'s scale. A balance whose one
/// percent cannot carry that many places in 28 significant digits is an
/// [`SplitError::Overflow`], never a silently rounded split.
pub fn split(balance: Decimal, precision: Precision) -> Result<SplitResult> {
    let one_percent = precision.round(
        balance
            .checked_mul(ONE_PERCENT)
            .ok_or(SplitError::Overflow("one percent"))?,
    )?;
    let base = one_percent
        .checked_div(LEG_COUNT)
        .ok_or(SplitError::Overflow("leg base"))?;

    let leg = precision.round(base)?;
    let mut legs = [leg; 3];

    let unit = precision.unit();
    let mut remainder = shortfall(one_percent, &legs, precision)?;
    while !remainder.is_zero() {
        let step = if remainder > Decimal::ZERO { unit } else { -unit };
        legs[0] = exact_add(legs[0], step, precision)?;
        remainder = shortfall(one_percent, &legs, precision)?;
    }

    tracing::trace!(%balance, %one_percent, legs = ?legs, "split computed");

    Ok(SplitResult { one_percent, legs })
}

fn exact_add(a: Decimal, b: Decimal, precision: Precision) -> Result<Decimal> {
    let sum = a.checked_add(b).ok_or(SplitError::Overflow("leg sum"))?;
    precision.exact(sum, "leg sum")
}

/// What the legs still owe `one_percent`; negative when they overshoot.
fn shortfall(one_percent: Decimal, legs: &[Decimal; 3], precision: Precision) -> Result<Decimal> {
    let total = exact_add(exact_add(legs[0], legs[1], precision)?, legs[2], precision)?;
    let owed = one_percent
        .checked_sub(total)
        .ok_or(SplitError::Overflow("leg remainder"))?;
    precision.exact(owed, "leg remainder")
}
