//! Principal persistence collaborator
//!
//! The auth core reads principals through `PrincipalStore` and never writes
//! them. Production uses `PgPrincipalStore`; tests and local tooling use
//! `InMemoryPrincipalStore`.

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{LoginRecord, PrincipalRecord};

pub use memory::InMemoryPrincipalStore;
pub use postgres::PgPrincipalStore;

#[async_trait]
pub trait PrincipalStore: Send + Sync {
    /// Current principal row for a subject, if it still exists
    async fn find_principal(&self, id: i64) -> Result<Option<PrincipalRecord>, StoreError>;

    /// Login row for an email address
    async fn find_login_by_email(&self, email: &str) -> Result<Option<LoginRecord>, StoreError>;
}
