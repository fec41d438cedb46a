/*
 * Responsibility
 * - GET /me: the caller's own record
 * - Any authenticated active employee; no role requirement
 */
use axum::Json;

use crate::api::v1::dto::employees::EmployeeResponse;
use crate::api::v1::extractors::EmployeeCtxExtractor;

pub async fn me(EmployeeCtxExtractor(ctx): EmployeeCtxExtractor) -> Json<EmployeeResponse> {
    Json(EmployeeResponse::from(ctx))
}
