pub mod error;
pub mod record;

pub use error::{Result, StoreError};
pub use record::{
    ANONYMOUS_ID, LANGCODE_NOT_SPECIFIED, RecordId, RoleId, RoleReference, Timestamp, UserRecord,
    current_timestamp,
};
