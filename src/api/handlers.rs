//! HTTP request handlers for the payroll engine API.
//!
//! Each handler decodes one request body, resolves optional fields against
//! the loaded policy, calls exactly one calculator and renders its result.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_daily_salary, calculate_monthly_salary, compute_aguinaldo, compute_finiquito,
    compute_weekly_pay, prorate_aguinaldo,
};
use crate::error::EngineError;
use crate::format::format_currency_with;
use crate::models::Amount;

use super::request::{
    AguinaldoRequest, DailySalaryRequest, FiniquitoRequest, FormatCurrencyRequest,
    MonthlySalaryRequest, ProrateRequest, WeeklyPayRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, DailySalaryResponse, FormatCurrencyResponse,
    MonthlySalaryResponse, ProrateResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/weekly-pay", post(weekly_pay_handler))
        .route("/aguinaldo", post(aguinaldo_handler))
        .route("/aguinaldo/prorate", post(prorate_handler))
        .route("/finiquito", post(finiquito_handler))
        .route("/salary/daily", post(daily_salary_handler))
        .route("/salary/monthly", post(monthly_salary_handler))
        .route("/format/currency", post(format_currency_handler))
        .route("/policy", get(policy_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
///
/// Well-formed JSON whose field cannot be decoded (a string where a number
/// belongs, say) is an `INVALID_ARGUMENT` naming that field.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                match rejected_field(&body_text) {
                    Some(field) => ApiError::invalid_argument(&field, &body_text),
                    None => ApiError::validation_error(body_text),
                }
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

/// Extracts the offending field from a serde data error and converts it to
/// the snake_case name the calculators report.
///
/// The message reads `"...target type: hourlyRate: invalid type: ..."`;
/// nested paths such as `bonuses[2]` are returned as-is after conversion.
fn rejected_field(body_text: &str) -> Option<String> {
    let (_, detail) = body_text.split_once("target type: ")?;
    let (path, _) = detail.split_once(": ")?;
    if path.is_empty() || path.contains(' ') {
        return None;
    }

    let mut field = String::with_capacity(path.len() + 4);
    for c in path.chars() {
        if c.is_ascii_uppercase() {
            field.push('_');
            field.push(c.to_ascii_lowercase());
        } else {
            field.push(c);
        }
    }
    Some(field)
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Decodes the body or returns the rejection response from the handler.
macro_rules! decode {
    ($payload:expr, $correlation_id:expr) => {
        match $payload {
            Ok(Json(request)) => request,
            Err(rejection) => return rejection_response($correlation_id, rejection),
        }
    };
}

/// Handler for POST /weekly-pay.
async fn weekly_pay_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeeklyPayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly pay request");

    let request = decode!(payload, correlation_id);
    let input = request.into_input(state.config().policy());

    let start_time = Instant::now();
    match compute_weekly_pay(&input) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                gross_pay = %result.gross_pay,
                net_pay = %result.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Weekly pay computed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /aguinaldo.
async fn aguinaldo_handler(
    State(state): State<AppState>,
    payload: Result<Json<AguinaldoRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing aguinaldo request");

    let request = decode!(payload, correlation_id);
    let input = request.into_input(state.config().policy());

    match compute_aguinaldo(&input) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                total_days = %result.total_days,
                aguinaldo_amount = %result.aguinaldo_amount,
                "Aguinaldo computed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /aguinaldo/prorate.
async fn prorate_handler(payload: Result<Json<ProrateRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing aguinaldo proration request");

    let request = decode!(payload, correlation_id);

    match prorate_aguinaldo(
        request.annual_amount,
        request.days_worked,
        request.days_in_year,
    ) {
        Ok(proportional_aguinaldo) => json_response(
            StatusCode::OK,
            ProrateResponse {
                proportional_aguinaldo,
            },
        ),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /finiquito.
async fn finiquito_handler(
    State(state): State<AppState>,
    payload: Result<Json<FiniquitoRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing finiquito request");

    let request = decode!(payload, correlation_id);
    let input = request.into_input(state.config().policy());

    match compute_finiquito(&input) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                total_finiquito = %result.total_finiquito,
                "Finiquito computed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /salary/daily.
async fn daily_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailySalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = decode!(payload, correlation_id);
    let hours_per_day = request
        .hours_per_day
        .unwrap_or(state.config().policy().regular_hours_daily);

    match calculate_daily_salary(request.hourly_rate, Some(hours_per_day)) {
        Ok(daily_salary) => json_response(StatusCode::OK, DailySalaryResponse { daily_salary }),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /salary/monthly.
async fn monthly_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlySalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = decode!(payload, correlation_id);
    let days_per_month = request
        .days_per_month
        .unwrap_or(state.config().policy().days_per_month);

    match calculate_monthly_salary(request.daily_salary, Some(days_per_month)) {
        Ok(monthly_salary) => {
            json_response(StatusCode::OK, MonthlySalaryResponse { monthly_salary })
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /format/currency. Always answers 200 for a decodable body.
async fn format_currency_handler(
    State(state): State<AppState>,
    payload: Result<Json<FormatCurrencyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = decode!(payload, correlation_id);
    let amount = request
        .amount
        .unwrap_or(Amount::Invalid(serde_json::Value::Null));

    let formatted = format_currency_with(
        state.config().conventions(),
        &amount,
        request.currency.as_deref(),
        request.locale.as_deref(),
    );
    json_response(StatusCode::OK, FormatCurrencyResponse { formatted })
}

/// Handler for GET /policy.
async fn policy_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().policy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoader, FormatConventions, PolicyConstants};
    use crate::models::{AguinaldoResult, WeeklyPayResult};
    use axum::{
        body::{Body, Bytes},
        http::Request,
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::builtin())
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn post_body(router: Router, uri: &str, body: String) -> (StatusCode, Bytes) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_weekly_pay_returns_200() {
        let router = create_router(create_test_state());
        let body = r#"{"hourlyRate": 30, "hours": 40, "overtimeHours": 5}"#.to_string();

        let (status, body) = post_body(router, "/weekly-pay", body).await;

        assert_eq!(status, StatusCode::OK);
        let result: WeeklyPayResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.gross_pay, dec("1425"));
    }

    #[tokio::test]
    async fn test_weekly_pay_uses_loaded_policy_factor() {
        let policy = PolicyConstants {
            overtime_factor: dec("2"),
            ..PolicyConstants::default()
        };
        let loader = ConfigLoader::from_parts(policy, FormatConventions::default());
        let router = create_router(AppState::new(loader));
        let body = r#"{"hourlyRate": 30, "hours": 40, "overtimeHours": 5}"#.to_string();

        let (_, body) = post_body(router, "/weekly-pay", body).await;

        let result: WeeklyPayResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.overtime_pay, dec("300"));
    }

    #[tokio::test]
    async fn test_negative_rate_returns_400_invalid_argument() {
        let router = create_router(create_test_state());
        let body = r#"{"hourlyRate": -1, "hours": 40, "overtimeHours": 0}"#.to_string();

        let (status, body) = post_body(router, "/weekly-pay", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_ARGUMENT");
        assert_eq!(error.details.as_deref(), Some("hourly_rate"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = post_body(router, "/aguinaldo", "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());

        let (status, body) = post_body(router, "/aguinaldo", r#"{"dailySalary": 300}"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("tenureYears"));
    }

    #[tokio::test]
    async fn test_non_numeric_rate_returns_invalid_argument() {
        let router = create_router(create_test_state());
        let body = r#"{"hourlyRate": "abc", "hours": 40, "overtimeHours": 0}"#.to_string();

        let (status, body) = post_body(router, "/weekly-pay", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_ARGUMENT");
        assert_eq!(error.details.as_deref(), Some("hourly_rate"));
    }

    #[tokio::test]
    async fn test_overflowing_input_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{"hourlyRate": 1e20, "hours": 1e20, "overtimeHours": 0}"#.to_string();

        let (status, body) = post_body(router, "/weekly-pay", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_ARGUMENT");
        assert_eq!(error.details.as_deref(), Some("regular_pay"));
    }

    #[test]
    fn test_rejected_field_is_snake_cased() {
        let text = "Failed to deserialize the JSON body into the target type: \
                    overtimeHours: invalid type: string \"x\", expected a Decimal";
        assert_eq!(rejected_field(text).as_deref(), Some("overtime_hours"));
    }

    #[test]
    fn test_rejected_field_without_path() {
        assert_eq!(rejected_field("Failed to parse the request body"), None);
    }

    #[tokio::test]
    async fn test_aguinaldo_returns_200() {
        let router = create_router(create_test_state());
        let body = r#"{"dailySalary": 300, "tenureYears": 5}"#.to_string();

        let (status, body) = post_body(router, "/aguinaldo", body).await;

        assert_eq!(status, StatusCode::OK);
        let result: AguinaldoResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.aguinaldo_amount, dec("5250"));
    }

    #[tokio::test]
    async fn test_format_currency_never_fails_on_garbage() {
        let router = create_router(create_test_state());

        let (status, body) = post_body(
            router,
            "/format/currency",
            r#"{"amount": {"nested": true}}"#.to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let response: FormatCurrencyResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.formatted, "$0.00");
    }

    #[tokio::test]
    async fn test_policy_endpoint_returns_constants() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/policy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let policy: PolicyConstants = serde_json::from_slice(&body).unwrap();
        assert_eq!(policy, PolicyConstants::default());
    }
}
