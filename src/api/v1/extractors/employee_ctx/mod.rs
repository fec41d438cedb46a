/*!
 * Authenticated-employee extractors (the role gate)
 *
 * Responsibility:
 * - Hand the authenticated context (EmployeeCtx) to handlers
 * - Enforce per-route role requirements at extraction time
 * - HTTP / axum plumbing stays in core, type definitions in types
 *
 * Public API:
 * - EmployeeCtx
 * - EmployeeCtxExtractor (any authenticated active employee)
 * - AdminOnly / ManagerOrAdmin (role-gated specializations)
 * - require_role (the general membership check)
 */

mod core;
mod types;

pub use core::{AdminOnly, EmployeeCtxExtractor, ManagerOrAdmin, require_role};
pub use types::EmployeeCtx;
