use chrono::Utc;
use serde::{Deserialize, Serialize};

pub type RecordId = i64;
pub type RoleId = i64;
pub type Timestamp = i64;

/// Reserved id of the synthetic anonymous record. Never present in storage.
pub const ANONYMOUS_ID: RecordId = 0;

/// Language sentinel for records created without an explicit language.
pub const LANGCODE_NOT_SPECIFIED: &str = "und";

/// A user-like principal record.
///
/// `id` is `None` until the record has been persisted; the store assigns it
/// on the first save. The two timestamp columns are denormalized and updated
/// through dedicated store operations rather than full saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: Option<RecordId>,
    name: String,
    last_login: Option<Timestamp>,
    last_access: Option<Timestamp>,
    langcode: String,
}

impl UserRecord {
    /// Creates an unsaved record with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            last_login: None,
            last_access: None,
            langcode: LANGCODE_NOT_SPECIFIED.to_string(),
        }
    }

    /// The anonymous record: fixed id 0, empty name.
    ///
    /// Pure construction. The storage layer refuses to persist it, so a
    /// lookup for id 0 always misses.
    pub fn anonymous() -> Self {
        Self {
            id: Some(ANONYMOUS_ID),
            name: String::new(),
            last_login: None,
            last_access: None,
            langcode: LANGCODE_NOT_SPECIFIED.to_string(),
        }
    }

    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_langcode(mut self, langcode: impl Into<String>) -> Self {
        self.langcode = langcode.into();
        self
    }

    pub fn with_last_login(mut self, timestamp: Timestamp) -> Self {
        self.last_login = Some(timestamp);
        self
    }

    pub fn with_last_access(mut self, timestamp: Timestamp) -> Self {
        self.last_access = Some(timestamp);
        self
    }

    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_login(&self) -> Option<Timestamp> {
        self.last_login
    }

    pub fn last_access(&self) -> Option<Timestamp> {
        self.last_access
    }

    pub fn langcode(&self) -> &str {
        &self.langcode
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.id == Some(ANONYMOUS_ID)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_last_login(&mut self, timestamp: Option<Timestamp>) {
        self.last_login = timestamp;
    }

    pub fn set_last_access(&mut self, timestamp: Option<Timestamp>) {
        self.last_access = timestamp;
    }

    pub(crate) fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

/// A join-table row linking a record to a role identifier.
///
/// No foreign key backs the pair; dangling rows are removed in bulk by the
/// reference cleaner when roles are deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleReference {
    pub record_id: RecordId,
    pub role_id: RoleId,
}

impl RoleReference {
    pub fn new(record_id: RecordId, role_id: RoleId) -> Self {
        Self { record_id, role_id }
    }
}

/// Seconds since the Unix epoch, from the host clock.
pub fn current_timestamp() -> Timestamp {
    Utc::now().timestamp()
}
