use thiserror::Error;

use super::record::RecordId;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Record {0} not found")]
    NotFound(RecordId),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Identity collision: id {0} is already assigned")]
    IdentityCollision(RecordId),
}

pub type Result<T> = std::result::Result<T, StoreError>;
