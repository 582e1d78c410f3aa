//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by any
//! [`roster_core::store::EmployeeStore`]. Transport and tracing layers are
//! the caller's responsibility, as is mounting the router under the
//! versioned base path.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api/v1/employees", roster_api::api_router(service))
//! ```

pub mod employees;
pub mod error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post},
};
use roster_core::{service::EmployeeService, store::EmployeeStore};

pub use error::{ApiError, ErrorMessage};

/// Build a fully-materialised employee router for `service`.
///
/// Routes are relative, so the caller decides the base path. The returned
/// `Router<()>` can be nested into any parent router regardless of its own
/// state type.
pub fn api_router<S>(service: Arc<EmployeeService<S>>) -> Router<()>
where
  S: EmployeeStore + 'static,
{
  Router::new()
    .route(
      "/",
      post(employees::create::<S>)
        .get(employees::list::<S>)
        .put(employees::update::<S>),
    )
    .route("/id/{id}", get(employees::get_by_id::<S>))
    .route("/name/{name}", get(employees::get_by_name::<S>))
    .route("/loc/{location}", get(employees::get_by_location::<S>))
    .route("/{id}", delete(employees::delete_one::<S>))
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────
