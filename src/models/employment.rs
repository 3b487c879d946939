//! Employment model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee's occupancy of one staffing position.
///
/// `staff_units` is the fractional headcount share (0–1) this employment
/// represents; the sum of staff units assigned against one staffing
/// position never exceeds that position's own share, which is enforced
/// upstream and assumed true here. `number` is the unique employment
/// identifying number that assignments and absences reference.
///
/// # Example
///
/// ```
/// use staffing_reports::models::Employment;
/// use rust_decimal::Decimal;
///
/// let employment = Employment {
///     number: "001".to_string(),
///     employee: "Ann Lee".to_string(),
///     department: "Engineering".to_string(),
///     position: "Engineer".to_string(),
///     staff_units: Decimal::ONE,
/// };
/// assert_eq!(employment.number, "001");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    /// Unique employment identifying number.
    pub number: String,
    /// Display name of the employee occupying the position.
    pub employee: String,
    /// Name of the department the position belongs to.
    pub department: String,
    /// Name of the staffing position.
    pub position: String,
    /// Fractional headcount share, 0–1.
    pub staff_units: Decimal,
}
