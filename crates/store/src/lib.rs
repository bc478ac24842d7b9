//! Storage of verified validation messages.
//!
//! Records are keyed by `(ledger_sequence, pubkey)`. Inserting a record whose key is
//! already present is not an error: backends report it as [`InsertOutcome::Conflict`]
//! and leave the stored record untouched.

mod disk;
mod memory;

pub use disk::RedbStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// A verified validation ready to be stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationRecord {
    pub ledger_sequence: u32,
    /// Node public key exactly as announced by the stream.
    pub pubkey: String,
    /// Raw validation message.
    pub data: Vec<u8>,
}

impl ValidationRecord {
    pub fn key(&self) -> (u32, &str) {
        (self.ledger_sequence, &self.pubkey)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A record with the same key was already stored.
    Conflict,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] redb::Error),

    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("store lock was poisoned")]
    Poisoned,
}

macro_rules! impl_from_redb_error {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for StoreError {
                fn from(e: $ty) -> Self {
                    Self::Database(e.into())
                }
            }
        )*
    };
}

impl_from_redb_error!(
    redb::DatabaseError,
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
);

#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Inserts `record` unless a record with the same key exists.
    async fn insert(&self, record: ValidationRecord) -> Result<InsertOutcome, StoreError>;
}
