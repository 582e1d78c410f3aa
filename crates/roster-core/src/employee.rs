//! Employee — the domain record managed by this service.
//!
//! The record is deliberately flat: a store-assigned id plus a handful of
//! attributes, two of which (`first_name`, `work_location`) double as lookup
//! keys. Wire format is camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Employee ────────────────────────────────────────────────────────────────

/// A persisted employee record.
///
/// `id` is assigned by the store on creation and is always `>= 1`; callers
/// supply it only when updating or deleting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:            i64,
  pub first_name:    String,
  pub last_name:     Option<String>,
  pub email:         Option<String>,
  pub work_location: String,
}

impl Employee {
  /// Check the update contract: a valid caller-supplied id plus the field
  /// rules shared with [`NewEmployee`].
  pub fn validate(&self) -> Result<()> {
    validate_id(self.id)?;
    validate_fields(&self.first_name, &self.work_location)
  }
}

// ─── NewEmployee ─────────────────────────────────────────────────────────────

/// Input to [`crate::store::EmployeeStore::add`].
/// The id is always assigned by the store; it is not accepted from callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
  pub first_name:    String,
  pub last_name:     Option<String>,
  pub email:         Option<String>,
  pub work_location: String,
}

impl NewEmployee {
  /// Convenience constructor with the optional fields left empty.
  pub fn new(
    first_name: impl Into<String>,
    work_location: impl Into<String>,
  ) -> Self {
    Self {
      first_name:    first_name.into(),
      last_name:     None,
      email:         None,
      work_location: work_location.into(),
    }
  }

  pub fn validate(&self) -> Result<()> {
    validate_fields(&self.first_name, &self.work_location)
  }

  /// Build the persisted record once the store has assigned `id`.
  pub fn into_employee(self, id: i64) -> Employee {
    Employee {
      id,
      first_name:    self.first_name,
      last_name:     self.last_name,
      email:         self.email,
      work_location: self.work_location,
    }
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Check that a caller-supplied id lies in the persisted range (`>= 1`).
pub fn validate_id(id: i64) -> Result<()> {
  if id < 1 {
    return Err(Error::InvalidId(id));
  }
  Ok(())
}

fn validate_fields(first_name: &str, work_location: &str) -> Result<()> {
  if first_name.trim().is_empty() {
    return Err(Error::EmptyFirstName);
  }
  if work_location.trim().is_empty() {
    return Err(Error::EmptyWorkLocation);
  }
  Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn minimal_record_is_valid() {
    assert!(NewEmployee::new("Alice", "NYC").validate().is_ok());
  }

  #[test]
  fn blank_first_name_is_rejected() {
    let mut input = NewEmployee::new("Alice", "NYC");
    input.first_name = "   ".into();
    assert!(matches!(input.validate(), Err(Error::EmptyFirstName)));
  }

  #[test]
  fn blank_work_location_is_rejected() {
    let input = NewEmployee::new("Alice", "");
    assert!(matches!(input.validate(), Err(Error::EmptyWorkLocation)));
  }

  #[test]
  fn update_requires_positive_id() {
    let employee = NewEmployee::new("Alice", "NYC").into_employee(0);
    assert!(matches!(employee.validate(), Err(Error::InvalidId(0))));

    let employee = NewEmployee::new("Alice", "NYC").into_employee(-3);
    assert!(matches!(employee.validate(), Err(Error::InvalidId(-3))));
  }

  #[test]
  fn wire_format_is_camel_case() {
    let employee = NewEmployee::new("Alice", "NYC").into_employee(1);
    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["firstName"], "Alice");
    assert_eq!(json["workLocation"], "NYC");
  }

  #[test]
  fn create_body_ignores_missing_optionals() {
    let input: NewEmployee =
      serde_json::from_str(r#"{"firstName":"Alice","workLocation":"NYC"}"#)
        .unwrap();
    assert_eq!(input.first_name, "Alice");
    assert_eq!(input.last_name, None);
    assert_eq!(input.email, None);
  }
}
