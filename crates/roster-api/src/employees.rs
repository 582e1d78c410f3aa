//! Handlers for the employee endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/` | Body: a record without `id`; returns 201 + stored record |
//! | `GET`    | `/` | All records, ordered by id |
//! | `GET`    | `/id/{id}` | 404 if no match |
//! | `GET`    | `/name/{name}` | Oldest record with that first name |
//! | `GET`    | `/loc/{location}` | Oldest record at that work location |
//! | `PUT`    | `/` | Body: full record incl. `id`; 404 if `id` unknown |
//! | `DELETE` | `/{id}` | 200 + plain-text confirmation |
//!
//! Every handler resolves errors to [`ApiError`], so clients see the same
//! JSON error body whether a request failed to parse, missed, or hit a
//! store fault.

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    OriginalUri, Path, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  employee::{Employee, NewEmployee, validate_id},
  service::EmployeeService,
  store::EmployeeStore,
};

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /` — body: a new employee without an `id`.
pub async fn create<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  OriginalUri(uri): OriginalUri,
  body: Result<Json<NewEmployee>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EmployeeStore + 'static,
{
  let Json(input) =
    body.map_err(|e| ApiError::bad_request(e.body_text(), &uri))?;
  tracing::info!("creating an employee record");

  input
    .validate()
    .map_err(|e| ApiError::bad_request(e.to_string(), &uri))?;

  let employee = service
    .add_employee(input)
    .await
    .map_err(|e| ApiError::store(e, &uri))?;
  Ok((StatusCode::CREATED, Json(employee)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /`
pub async fn list<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<Employee>>, ApiError>
where
  S: EmployeeStore + 'static,
{
  tracing::info!("fetching all employee records");

  let employees = service
    .get_all()
    .await
    .map_err(|e| ApiError::store(e, &uri))?;
  Ok(Json(employees))
}

// ─── Get by id ────────────────────────────────────────────────────────────────

/// `GET /id/{id}`
pub async fn get_by_id<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  OriginalUri(uri): OriginalUri,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore + 'static,
{
  let Path(id) = id.map_err(|e| ApiError::bad_request(e.body_text(), &uri))?;
  tracing::info!("fetching employee by id: {id}");

  let employee = service
    .get_by_id(id)
    .await
    .map_err(|e| ApiError::store(e, &uri))?
    .ok_or_else(|| {
      ApiError::not_found(format!("employee not found with id: {id}"), &uri)
    })?;
  Ok(Json(employee))
}

// ─── Get by name ──────────────────────────────────────────────────────────────

/// `GET /name/{name}` — oldest match wins when first names collide.
pub async fn get_by_name<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  OriginalUri(uri): OriginalUri,
  Path(first_name): Path<String>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore + 'static,
{
  tracing::info!("fetching employee by first name: {first_name}");

  let employee = service
    .get_by_first_name(&first_name)
    .await
    .map_err(|e| ApiError::store(e, &uri))?
    .ok_or_else(|| {
      ApiError::not_found(
        format!("employee not found with first name: {first_name}"),
        &uri,
      )
    })?;
  Ok(Json(employee))
}

// ─── Get by location ──────────────────────────────────────────────────────────

/// `GET /loc/{location}` — oldest match wins when locations collide.
pub async fn get_by_location<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  OriginalUri(uri): OriginalUri,
  Path(work_location): Path<String>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore + 'static,
{
  tracing::info!("fetching employee by work location: {work_location}");

  let employee = service
    .get_by_work_location(&work_location)
    .await
    .map_err(|e| ApiError::store(e, &uri))?
    .ok_or_else(|| {
      ApiError::not_found(
        format!("employee not found with work location: {work_location}"),
        &uri,
      )
    })?;
  Ok(Json(employee))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /` — body: a full employee record, `id` included.
///
/// A missing `id` is reported as 404; anything the store itself fails on
/// surfaces as 500, never as a phantom "not found".
pub async fn update<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  OriginalUri(uri): OriginalUri,
  body: Result<Json<Employee>, JsonRejection>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore + 'static,
{
  let Json(employee) =
    body.map_err(|e| ApiError::bad_request(e.body_text(), &uri))?;
  tracing::info!("updating employee record with id: {}", employee.id);

  employee
    .validate()
    .map_err(|e| ApiError::bad_request(e.to_string(), &uri))?;

  let updated = service
    .update_employee(&employee)
    .await
    .map_err(|e| ApiError::store(e, &uri))?
    .ok_or_else(|| {
      ApiError::not_found(
        format!("employee not found with id: {}", employee.id),
        &uri,
      )
    })?;
  Ok(Json(updated))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /{id}`
pub async fn delete_one<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  OriginalUri(uri): OriginalUri,
  id: Result<Path<i64>, PathRejection>,
) -> Result<&'static str, ApiError>
where
  S: EmployeeStore + 'static,
{
  let Path(id) = id.map_err(|e| ApiError::bad_request(e.body_text(), &uri))?;
  tracing::info!("deleting employee by id: {id}");

  validate_id(id).map_err(|e| ApiError::bad_request(e.to_string(), &uri))?;

  let removed = service
    .delete_employee(id)
    .await
    .map_err(|e| ApiError::store(e, &uri))?;
  if !removed {
    return Err(ApiError::not_found(
      format!("employee record not found with id: {id}"),
      &uri,
    ));
  }
  Ok("Employee record successfully deleted.")
}
