//! Postgres-backed principal store
//!
//! Runtime `sqlx::query_as` against the `users` table owned by the account
//! services. `role` is read as text so an unknown stored value reaches the
//! resolver instead of failing row decoding.

use async_trait::async_trait;
use sqlx::PgPool;

use super::PrincipalStore;
use crate::error::StoreError;
use crate::types::{LoginRecord, PrincipalRecord};

#[derive(Clone)]
pub struct PgPrincipalStore {
    pool: PgPool,
}

impl PgPrincipalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrincipalStore for PgPrincipalStore {
    async fn find_principal(&self, id: i64) -> Result<Option<PrincipalRecord>, StoreError> {
        let record: Option<PrincipalRecord> = sqlx::query_as(
            r#"
            SELECT id, email, name, role::text AS role
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = id, "Failed to load principal");
            StoreError::Database(e)
        })?;

        Ok(record)
    }

    async fn find_login_by_email(&self, email: &str) -> Result<Option<LoginRecord>, StoreError> {
        let record: Option<LoginRecord> = sqlx::query_as(
            r#"
            SELECT id, email, password_hash
            FROM users
            WHERE lower(email) = lower($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to load login record");
            StoreError::Database(e)
        })?;

        Ok(record)
    }
}
