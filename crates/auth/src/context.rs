//! Authorization context for authenticated principals

use serde::Serialize;

use crate::types::{Principal, Role};

/// Request-scoped view of an authenticated principal.
///
/// Built fresh for every request from a verified access credential and
/// dropped with the request. Exactly one role flag is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationContext {
    principal: Principal,
    is_admin: bool,
    is_trainer: bool,
    is_client: bool,
}

impl AuthorizationContext {
    pub fn new(principal: Principal) -> Self {
        let role = principal.role;
        Self {
            principal,
            is_admin: role == Role::Admin,
            is_trainer: role == Role::Trainer,
            is_client: role == Role::Client,
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn subject_id(&self) -> i64 {
        self.principal.id
    }

    pub fn role(&self) -> Role {
        self.principal.role
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn is_trainer(&self) -> bool {
        self.is_trainer
    }

    pub fn is_client(&self) -> bool {
        self.is_client
    }
}
