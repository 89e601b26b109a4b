//! In-memory principal store for tests and local tooling

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::PrincipalStore;
use crate::error::StoreError;
use crate::types::{LoginRecord, PrincipalRecord};

#[derive(Debug, Clone)]
struct StoredPrincipal {
    record: PrincipalRecord,
    password_hash: String,
}

#[derive(Debug, Default)]
pub struct InMemoryPrincipalStore {
    principals: RwLock<HashMap<i64, StoredPrincipal>>,
}

impl InMemoryPrincipalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a principal
    pub async fn insert(&self, record: PrincipalRecord, password_hash: impl Into<String>) {
        let stored = StoredPrincipal {
            record,
            password_hash: password_hash.into(),
        };
        self.principals
            .write()
            .await
            .insert(stored.record.id, stored);
    }

    /// Delete a principal; credentials already issued to it stay signed
    pub async fn remove(&self, id: i64) -> bool {
        self.principals.write().await.remove(&id).is_some()
    }

    /// Overwrite the stored role string
    pub async fn set_role(&self, id: i64, role: impl Into<String>) -> bool {
        match self.principals.write().await.get_mut(&id) {
            Some(stored) => {
                stored.record.role = role.into();
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl PrincipalStore for InMemoryPrincipalStore {
    async fn find_principal(&self, id: i64) -> Result<Option<PrincipalRecord>, StoreError> {
        Ok(self
            .principals
            .read()
            .await
            .get(&id)
            .map(|stored| stored.record.clone()))
    }

    async fn find_login_by_email(&self, email: &str) -> Result<Option<LoginRecord>, StoreError> {
        let principals = self.principals.read().await;
        Ok(principals
            .values()
            .find(|stored| stored.record.email.eq_ignore_ascii_case(email))
            .map(|stored| LoginRecord {
                id: stored.record.id,
                email: stored.record.email.clone(),
                password_hash: stored.password_hash.clone(),
            }))
    }
}
