//! API layer for the Accounts domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::SessionError;
pub use routes::routes;
pub use state::AccountsState;
