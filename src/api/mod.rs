//! HTTP API module for the payroll engine.
//!
//! This module exposes the calculators and the currency formatter as JSON
//! endpoints. Handlers hold no state beyond the loaded policy.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AguinaldoRequest, DailySalaryRequest, FiniquitoRequest, FormatCurrencyRequest,
    MonthlySalaryRequest, ProrateRequest, WeeklyPayRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, DailySalaryResponse, FormatCurrencyResponse,
    MonthlySalaryResponse, ProrateResponse,
};
pub use state::AppState;
