//! Axum HTTP handlers for the calculator services
//!
//! Provides the form page and submission endpoint, the JSON query endpoint,
//! and the health endpoint shared by both routers.

use axum::{
    extract::{rejection::FormRejection, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::ops::Operation;
use crate::domain::utils::{parse_number, require_param};
use crate::errors::AppError;

const FORM_PAGE: &str = include_str!("../../static/form.html");

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CalculationForm {
    #[serde(default)]
    pub num1: Option<String>,
    #[serde(default)]
    pub num2: Option<String>,
    #[serde(default)]
    pub operacao: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CalculationQuery {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub num1: Option<String>,
    #[serde(default)]
    pub num2: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub resultado: f64,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Serves the static calculator page. Routed as the fallback for every
/// non-POST method on the form service.
pub async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Handles a form submission. Success and errors are both plain text on
/// this surface; the JSON error envelope belongs to the query service.
pub async fn form_calculate(form: Result<Form<CalculationForm>, FormRejection>) -> Response {
    let result = form
        .map_err(|rejection| AppError::bad_request("invalid_form_body", rejection.body_text()))
        .and_then(|Form(input)| evaluate_form(&input));

    match result {
        Ok(value) => (StatusCode::OK, format!("Result: {value:.6}")).into_response(),
        Err(error) => (error.status(), error.message()).into_response(),
    }
}

fn evaluate_form(input: &CalculationForm) -> Result<f64, AppError> {
    let num1 = parse_number(require_param(input.num1.as_deref(), "num1")?, "num1")?;
    let num2 = parse_number(require_param(input.num2.as_deref(), "num2")?, "num2")?;
    let operation = lookup_operation(require_param(input.operacao.as_deref(), "operacao")?)?;
    operation.apply(num1, num2)
}

/// Handles `GET /?action=<op>&num1=<n>&num2=<n>` on the query service.
pub async fn query_calculate(
    Query(params): Query<CalculationQuery>,
) -> Result<Json<CalculationResponse>, AppError> {
    let action = require_param(params.action.as_deref(), "action")?;
    let num1 = require_param(params.num1.as_deref(), "num1")?;
    let num2 = require_param(params.num2.as_deref(), "num2")?;

    let operation = lookup_operation(action)?;
    let num1 = parse_number(num1, "num1")?;
    let num2 = parse_number(num2, "num2")?;

    let resultado = operation.apply(num1, num2)?;
    Ok(Json(CalculationResponse { resultado }))
}

/// Fallback for the query endpoint; only GET computes.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

fn lookup_operation(name: &str) -> Result<Operation, AppError> {
    Operation::lookup(name)
        .ok_or_else(|| AppError::bad_request("unknown_operation", format!("unknown operation: {name:?}")))
}
