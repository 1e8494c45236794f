//! Input and result records for the payroll calculation engine.
//!
//! Every record is an immutable value; results are produced by the
//! calculators in [`crate::calculation`] and never mutated afterwards.

mod aguinaldo;
mod amount;
mod finiquito;
mod weekly_pay;

pub use aguinaldo::{AguinaldoInput, AguinaldoResult};
pub use amount::{Amount, sum_amounts};
pub use finiquito::{FiniquitoInput, FiniquitoResult};
pub use weekly_pay::{WeeklyPayInput, WeeklyPayResult};
