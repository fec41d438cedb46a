/*
 * Responsibility
 * - Employee response DTO
 * - Built from either the repo row or the authenticated context
 */
use serde::Serialize;

use crate::api::v1::extractors::EmployeeCtx;
use crate::repos::employee_repo::{EmployeeRow, Role};

#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
}

impl From<EmployeeRow> for EmployeeResponse {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            full_name: row.full_name,
            role: row.role,
            is_active: row.is_active,
        }
    }
}

impl From<EmployeeCtx> for EmployeeResponse {
    fn from(ctx: EmployeeCtx) -> Self {
        Self {
            id: ctx.id,
            email: ctx.email,
            full_name: ctx.full_name,
            role: ctx.role,
            is_active: ctx.is_active,
        }
    }
}
