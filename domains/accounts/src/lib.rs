//! Accounts domain: login, credential refresh, logout, and caller introspection

pub mod api;

pub use api::routes;
pub use api::AccountsState;

// Re-export auth types so route crates depend on one domain surface
pub use pulsefit_auth::{
    AdminUser, AuthBackend, AuthConfig, AuthError, AuthUser, AuthorizationContext, TrainerUser,
};
