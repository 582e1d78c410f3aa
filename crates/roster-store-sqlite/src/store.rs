//! [`SqliteStore`] — the SQLite implementation of [`EmployeeStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use roster_core::{
  employee::{Employee, NewEmployee},
  store::EmployeeStore,
};

use crate::{Result, schema::SCHEMA};

// ─── Row mapping ─────────────────────────────────────────────────────────────

/// Map one `employees` row (selected in schema column order) to the domain
/// record.
fn employee_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
  Ok(Employee {
    id:            row.get(0)?,
    first_name:    row.get(1)?,
    last_name:     row.get(2)?,
    email:         row.get(3)?,
    work_location: row.get(4)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An employee store backed by a single SQLite file.
///
/// Clones are cheap and share the same underlying connection.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) the database at `path` and apply the schema.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open a store backed by an in-memory database, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  type Error = crate::Error;

  async fn add(&self, input: NewEmployee) -> Result<Employee> {
    let (id, input) = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employees (first_name, last_name, email, work_location)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![
            input.first_name,
            input.last_name,
            input.email,
            input.work_location,
          ],
        )?;
        Ok((conn.last_insert_rowid(), input))
      })
      .await?;

    Ok(input.into_employee(id))
  }

  async fn list(&self) -> Result<Vec<Employee>> {
    let employees = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, first_name, last_name, email, work_location
           FROM employees ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], employee_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(employees)
  }

  async fn get_by_id(&self, id: i64) -> Result<Option<Employee>> {
    let employee = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, first_name, last_name, email, work_location
               FROM employees WHERE id = ?1",
              rusqlite::params![id],
              employee_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(employee)
  }

  async fn get_by_first_name(
    &self,
    first_name: &str,
  ) -> Result<Option<Employee>> {
    let first_name = first_name.to_owned();

    let employee = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, first_name, last_name, email, work_location
               FROM employees WHERE first_name = ?1
               ORDER BY id LIMIT 1",
              rusqlite::params![first_name],
              employee_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(employee)
  }

  async fn get_by_work_location(
    &self,
    work_location: &str,
  ) -> Result<Option<Employee>> {
    let work_location = work_location.to_owned();

    let employee = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, first_name, last_name, email, work_location
               FROM employees WHERE work_location = ?1
               ORDER BY id LIMIT 1",
              rusqlite::params![work_location],
              employee_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(employee)
  }

  async fn update(&self, employee: &Employee) -> Result<Option<Employee>> {
    let employee = employee.clone();

    let (rows, employee) = self
      .conn
      .call(move |conn| {
        let rows = conn.execute(
          "UPDATE employees
             SET first_name = ?2, last_name = ?3, email = ?4,
                 work_location = ?5
           WHERE id = ?1",
          rusqlite::params![
            employee.id,
            employee.first_name,
            employee.last_name,
            employee.email,
            employee.work_location,
          ],
        )?;
        Ok((rows, employee))
      })
      .await?;

    if rows == 0 {
      return Ok(None);
    }
    Ok(Some(employee))
  }

  async fn delete(&self, id: i64) -> Result<bool> {
    let rows = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM employees WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    Ok(rows > 0)
  }
}
