/*
 * Responsibility
 * - The "authenticated context" type handlers see
 * - The middleware verifies the token, resolves the employee, and stores this
 *   in request extensions; handlers only ever receive this type
 *
 * Notes
 * - Token verification and the persistence lookup are middleware/services
 *   concerns; this is the contract type only
 * - An EmployeeCtx in extensions implies the account was active at resolve
 *   time (the middleware rejects inactive accounts before inserting it)
 */

use crate::repos::employee_repo::{EmployeeRow, Role};

/// Context attached to every authenticated request.
#[derive(Debug, Clone)]
pub struct EmployeeCtx {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
}

impl From<EmployeeRow> for EmployeeCtx {
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
