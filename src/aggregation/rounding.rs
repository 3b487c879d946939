//! Sum-preserving proportional rounding.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ReportError, ReportResult};

/// Rounds a sequence of values to `precision` decimal places so that the
/// rounded values sum exactly to `total`.
///
/// `total` must itself already be rounded to `precision` places. The
/// largest-remainder method is used: every value is floored at the target
/// precision, and the difference to the control total is distributed one
/// last-place unit at a time to the values with the largest discarded
/// remainders. Input order is preserved in the output.
///
/// # Errors
///
/// Returns [`ReportError::RoundingInvariant`] when the difference between
/// the scaled control total and the floor sum falls outside `0..=len`,
/// which means the inputs do not sum to approximately `total`.
///
/// # Example
///
/// ```
/// use staffing_reports::aggregation::round_preserving_sum;
/// use rust_decimal::Decimal;
///
/// let values = vec![
///     Decimal::new(3333, 2),
///     Decimal::new(3333, 2),
///     Decimal::new(3334, 2),
/// ];
/// let rounded = round_preserving_sum(&values, Decimal::new(100, 0), 0).unwrap();
/// let sum: Decimal = rounded.iter().copied().sum();
/// assert_eq!(sum, Decimal::new(100, 0));
/// ```
pub fn round_preserving_sum(
    values: &[Decimal],
    total: Decimal,
    precision: u32,
) -> ReportResult<Vec<Decimal>> {
    let scale = Decimal::from(10u64.pow(precision));

    // Keep the floored part and the discarded remainder of every value,
    // remembering its input position.
    let mut parts: Vec<(usize, Decimal, Decimal)> = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let scaled = value * scale;
            let floor = scaled.floor();
            (index, floor, scaled - floor)
        })
        .collect();

    let floor_sum: Decimal = parts.iter().map(|(_, floor, _)| *floor).sum();
    let target = (total * scale).round();
    let delta = (target - floor_sum).to_i64().unwrap_or(i64::MAX);

    if delta < 0 || delta as usize > parts.len() {
        return Err(ReportError::RoundingInvariant {
            delta,
            count: parts.len(),
            total,
        });
    }

    // Hand one last-place unit to the values with the largest discarded
    // remainders; the sort is stable, so ties keep input order.
    parts.sort_by(|a, b| b.2.cmp(&a.2));
    for part in parts.iter_mut().take(delta as usize) {
        part.1 += Decimal::ONE;
    }
    parts.sort_by_key(|part| part.0);

    Ok(parts.into_iter().map(|(_, floor, _)| floor / scale).collect())
}
