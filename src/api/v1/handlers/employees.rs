/*
 * Responsibility
 * - /employees read handlers
 * - Role requirements are declared by the extractor in the signature:
 *   list is manager-or-admin, detail is admin-only
 */
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    api::v1::dto::employees::EmployeeResponse,
    api::v1::extractors::{AdminOnly, ManagerOrAdmin},
    error::AppError,
    repos::employee_repo,
    state::AppState,
};

pub async fn list_employees(
    ManagerOrAdmin(_caller): ManagerOrAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let rows = employee_repo::list(&state.db).await?;
    let res = rows.into_iter().map(EmployeeResponse::from).collect();

    Ok(Json(res))
}

pub async fn get_employee(
    AdminOnly(_caller): AdminOnly,
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let row = employee_repo::find_by_id(&state.db, employee_id)
        .await?
        .ok_or(AppError::NotFound("Employee"))?;

    Ok(Json(EmployeeResponse::from(row)))
}
