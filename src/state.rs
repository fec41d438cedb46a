/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 *   - db: PgPool, auth: AuthService, app_version for the welcome payload
 * - Cloned per request (internals are Arc / cheap to clone)
 */
use std::sync::Arc;

use crate::services::auth::AuthService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub auth: Arc<AuthService>,
    pub app_version: String,
}

impl AppState {
    pub fn new(db: sqlx::PgPool, auth: Arc<AuthService>, app_version: String) -> Self {
        Self {
            db,
            auth,
            app_version,
        }
    }
}
