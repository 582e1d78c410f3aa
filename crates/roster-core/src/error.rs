//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("first name must not be empty")]
  EmptyFirstName,

  #[error("work location must not be empty")]
  EmptyWorkLocation,

  #[error("invalid employee id {0}: must be a positive integer")]
  InvalidId(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
