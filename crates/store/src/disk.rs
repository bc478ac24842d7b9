use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use tokio::task::spawn_blocking;
use tracing::debug;

use crate::{InsertOutcome, Store, StoreError, ValidationRecord};

const VALIDATIONS: TableDefinition<(u32, &str), &[u8]> = TableDefinition::new("validations");

/// A store backed by an embedded `redb` database file.
#[derive(Clone, Debug)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Opens the database at `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let db = Database::create(path)?;

        // Create the table up front so that readers never see it missing.
        let tx = db.begin_write()?;
        tx.open_table(VALIDATIONS)?;
        tx.commit()?;

        debug!(path = %path.display(), "Opened validation store");

        Ok(Self { db: Arc::new(db) })
    }

    pub fn get(&self, ledger_sequence: u32, pubkey: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let tx = self.db.begin_read()?;
        let table = tx.open_table(VALIDATIONS)?;
        let value = table.get((ledger_sequence, pubkey))?;

        Ok(value.map(|v| v.value().to_vec()))
    }

    pub fn len(&self) -> Result<u64, StoreError> {
        let tx = self.db.begin_read()?;
        let table = tx.open_table(VALIDATIONS)?;

        Ok(table.len()?)
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.len().map(|len| len == 0)
    }

    fn insert_blocking(db: &Database, record: &ValidationRecord) -> Result<InsertOutcome, StoreError> {
        let tx = db.begin_write()?;

        {
            let mut table = tx.open_table(VALIDATIONS)?;

            if table.get(record.key())?.is_some() {
                drop(table);
                tx.abort()?;
                return Ok(InsertOutcome::Conflict);
            }

            table.insert(record.key(), record.data.as_slice())?;
        }

        tx.commit()?;
        Ok(InsertOutcome::Inserted)
    }
}

#[async_trait]
impl Store for RedbStore {
    async fn insert(&self, record: ValidationRecord) -> Result<InsertOutcome, StoreError> {
        let db = Arc::clone(&self.db);
        spawn_blocking(move || Self::insert_blocking(&db, &record)).await?
    }
}
