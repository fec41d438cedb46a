use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::repos::employee_repo::Role;

use super::EmployeeCtx;

/// The membership test every gate is a configuration of.
fn gate(ctx: &EmployeeCtx, allowed: &[Role], message: &'static str) -> Result<(), AppError> {
    if allowed.contains(&ctx.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden(message))
    }
}

/// General role gate: allow the request iff the employee's role is a member
/// of the required set. Pure and stateless; evaluated once per request.
pub fn require_role(ctx: &EmployeeCtx, allowed: &[Role]) -> Result<(), AppError> {
    gate(ctx, allowed, "Not enough permissions")
}

/// Extractor for handlers that accept any authenticated active employee.
///
/// The middleware must have inserted EmployeeCtx into request.extensions();
/// if it is missing (route not behind the auth middleware) this rejects with
/// 401 rather than letting an unauthenticated request through.
#[derive(Debug)]
pub struct EmployeeCtxExtractor(pub EmployeeCtx);

impl<S> FromRequestParts<S> for EmployeeCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<EmployeeCtx>()
            .cloned()
            .map(EmployeeCtxExtractor)
            .ok_or(AppError::Unauthenticated)
    }
}

/// Admin-only gate.
#[derive(Debug)]
pub struct AdminOnly(pub EmployeeCtx);

impl<S> FromRequestParts<S> for AdminOnly
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let EmployeeCtxExtractor(ctx) =
            EmployeeCtxExtractor::from_request_parts(parts, state).await?;

        gate(&ctx, &[Role::Admin], "Admin access required")?;

        Ok(AdminOnly(ctx))
    }
}

/// Manager-or-admin gate.
#[derive(Debug)]
pub struct ManagerOrAdmin(pub EmployeeCtx);

impl<S> FromRequestParts<S> for ManagerOrAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let EmployeeCtxExtractor(ctx) =
            EmployeeCtxExtractor::from_request_parts(parts, state).await?;

        gate(
            &ctx,
            &[Role::Admin, Role::Manager],
            "Manager or Admin access required",
        )?;

        Ok(ManagerOrAdmin(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn ctx(id: i64, role: Role) -> EmployeeCtx {
        EmployeeCtx {
            id,
            email: format!("emp{id}@example.com"),
            full_name: format!("Employee {id}"),
            role,
            is_active: true,
        }
    }

    fn parts_with(ctx: Option<EmployeeCtx>) -> Parts {
        let (mut parts, _) = Request::builder().uri("/").body(()).unwrap().into_parts();
        if let Some(ctx) = ctx {
            parts.extensions.insert(ctx);
        }
        parts
    }

    #[test]
    fn require_role_passes_on_membership() {
        let admin = ctx(1, Role::Admin);
        assert!(require_role(&admin, &[Role::Admin, Role::Manager]).is_ok());
    }

    #[test]
    fn require_role_rejects_non_members() {
        // Manager hitting an admin-only requirement set
        let manager = ctx(42, Role::Manager);
        let err = require_role(&manager, &[Role::Admin]).unwrap_err();
        assert!(matches!(err, AppError::Forbidden("Not enough permissions")));
    }

    #[tokio::test]
    async fn missing_context_rejects_with_unauthenticated() {
        let mut parts = parts_with(None);
        let err = EmployeeCtxExtractor::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthenticated));
    }

    #[tokio::test]
    async fn any_active_employee_passes_the_plain_extractor() {
        let mut parts = parts_with(Some(ctx(3, Role::Staff)));
        let EmployeeCtxExtractor(got) = EmployeeCtxExtractor::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(got.id, 3);
    }

    #[tokio::test]
    async fn admin_only_rejects_manager() {
        let mut parts = parts_with(Some(ctx(42, Role::Manager)));
        let err = AdminOnly::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden("Admin access required")));
    }

    #[tokio::test]
    async fn admin_only_passes_admin_through_unchanged() {
        let mut parts = parts_with(Some(ctx(1, Role::Admin)));
        let AdminOnly(got) = AdminOnly::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(got.id, 1);
        assert_eq!(got.role, Role::Admin);
    }

    #[tokio::test]
    async fn manager_or_admin_accepts_both_and_rejects_staff() {
        for role in [Role::Admin, Role::Manager] {
            let mut parts = parts_with(Some(ctx(5, role)));
            assert!(
                ManagerOrAdmin::from_request_parts(&mut parts, &())
                    .await
                    .is_ok()
            );
        }

        let mut parts = parts_with(Some(ctx(9, Role::Staff)));
        let err = ManagerOrAdmin::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Forbidden("Manager or Admin access required")
        ));
    }
}
