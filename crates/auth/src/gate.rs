//! Role gate: turns an optional context into an allow/deny decision

use crate::context::AuthorizationContext;

/// Precondition a route places on its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRole {
    /// Any authenticated principal
    Authenticated,
    Trainer,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DenyReason {
    #[error("authentication required")]
    Unauthenticated,
    #[error("insufficient role")]
    InsufficientRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow(AuthorizationContext),
    Deny(DenyReason),
}

impl Decision {
    pub fn into_result(self) -> Result<AuthorizationContext, DenyReason> {
        match self {
            Decision::Allow(ctx) => Ok(ctx),
            Decision::Deny(reason) => Err(reason),
        }
    }
}

/// Single-step authorization decision.
///
/// Roles are disjoint: `Trainer` admits trainers only, `Admin` admins only.
pub fn authorize(context: Option<AuthorizationContext>, required: RequiredRole) -> Decision {
    let Some(context) = context else {
        return Decision::Deny(DenyReason::Unauthenticated);
    };

    let permitted = match required {
        RequiredRole::Authenticated => true,
        RequiredRole::Trainer => context.is_trainer(),
        RequiredRole::Admin => context.is_admin(),
    };

    if permitted {
        Decision::Allow(context)
    } else {
        Decision::Deny(DenyReason::InsufficientRole)
    }
}
