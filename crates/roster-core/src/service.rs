//! `EmployeeService` — the thin layer between HTTP handlers and the store.
//!
//! Each call forwards to the persistence gateway unchanged; absence comes
//! back as an explicit `Option`/`bool` and the caller decides how to surface
//! it. Stateless: no retries, no partial-failure handling beyond propagating
//! the gateway's outcome.

use crate::{
  employee::{Employee, NewEmployee},
  store::EmployeeStore,
};

/// Wraps an [`EmployeeStore`] behind the operation set the HTTP layer needs.
pub struct EmployeeService<S> {
  store: S,
}

impl<S: EmployeeStore> EmployeeService<S> {
  pub fn new(store: S) -> Self {
    Self { store }
  }

  /// Persist a new employee record; the store assigns its id.
  pub async fn add_employee(
    &self,
    input: NewEmployee,
  ) -> Result<Employee, S::Error> {
    self.store.add(input).await
  }

  /// Every employee record, ordered by id.
  pub async fn get_all(&self) -> Result<Vec<Employee>, S::Error> {
    self.store.list().await
  }

  pub async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, S::Error> {
    self.store.get_by_id(id).await
  }

  pub async fn get_by_first_name(
    &self,
    first_name: &str,
  ) -> Result<Option<Employee>, S::Error> {
    self.store.get_by_first_name(first_name).await
  }

  pub async fn get_by_work_location(
    &self,
    work_location: &str,
  ) -> Result<Option<Employee>, S::Error> {
    self.store.get_by_work_location(work_location).await
  }

  /// Overwrite an existing record. `None` means the target id is not
  /// persisted; real store failures stay in `Err`.
  pub async fn update_employee(
    &self,
    employee: &Employee,
  ) -> Result<Option<Employee>, S::Error> {
    self.store.update(employee).await
  }

  /// Remove a record by id; `true` when something was removed.
  pub async fn delete_employee(&self, id: i64) -> Result<bool, S::Error> {
    self.store.delete(id).await
  }
}
