/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The verified caller of a registry or script operation.
///
/// Produced once by the authentication layer and passed explicitly into every
/// operation that is scoped to an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: DbId,
}

impl Identity {
    pub fn new(user_id: DbId) -> Self {
        Self { user_id }
    }

    /// Whether this identity owns a record belonging to `owner_id`.
    pub fn owns(&self, owner_id: DbId) -> bool {
        self.user_id == owner_id
    }
}
