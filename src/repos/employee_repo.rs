/*
 * Responsibility
 * - SQLx operations against the employees table
 * - Takes a PgPool, returns rows; DB errors surface as RepoError
 * - Rows are read-only here: this API never mutates employees
 */
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

/// Employee role, stored as the `user_role` enum in Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
}

pub async fn find_by_id(db: &PgPool, employee_id: i64) -> Result<Option<EmployeeRow>, RepoError> {
    let row = sqlx::query_as::<_, EmployeeRow>(
        r#"
        SELECT id, email, full_name, role, is_active
        FROM employees
        WHERE id = $1
        "#,
    )
    .bind(employee_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn list(db: &PgPool) -> Result<Vec<EmployeeRow>, RepoError> {
    let rows = sqlx::query_as::<_, EmployeeRow>(
        r#"
        SELECT id, email, full_name, role, is_active
        FROM employees
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}
