//! The `EmployeeStore` trait — the persistence gateway.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! Higher layers depend on this abstraction, not on any concrete backend.
//!
//! Absence of a record is always an explicit result (`Option`, `bool`),
//! never an error raised here: callers decide how to surface a miss.

use std::future::Future;

use crate::employee::{Employee, NewEmployee};

/// Abstraction over the backing store's row-level CRUD operations.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EmployeeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new employee record; the store assigns the id (always `>= 1`).
  fn add(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// All employee records, ordered by id.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Retrieve an employee by id. Returns `None` if not found.
  fn get_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Retrieve the oldest employee with this first name, if any.
  fn get_by_first_name<'a>(
    &'a self,
    first_name: &'a str,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;

  /// Retrieve the oldest employee at this work location, if any.
  fn get_by_work_location<'a>(
    &'a self,
    work_location: &'a str,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;

  /// Overwrite the record whose id matches `employee.id`.
  ///
  /// Returns `None` when no such record exists. `Err` is reserved for real
  /// store failures, so callers can always tell the two apart.
  fn update<'a>(
    &'a self,
    employee: &'a Employee,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;

  /// Remove the record with this id. No-op-safe: returns `true` when a
  /// record was removed, `false` when nothing matched.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
