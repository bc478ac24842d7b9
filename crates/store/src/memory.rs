use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{InsertOutcome, Store, StoreError, ValidationRecord};

/// An in-process store, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<(u32, String), Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ledger_sequence: u32, pubkey: &str) -> Option<Vec<u8>> {
        let records = self.records.lock().ok()?;
        records.get(&(ledger_sequence, pubkey.to_string())).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All stored records, ordered by key.
    pub fn records(&self) -> Vec<ValidationRecord> {
        let Ok(records) = self.records.lock() else {
            return Vec::new();
        };

        records
            .iter()
            .map(|((ledger_sequence, pubkey), data)| ValidationRecord {
                ledger_sequence: *ledger_sequence,
                pubkey: pubkey.clone(),
                data: data.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert(&self, record: ValidationRecord) -> Result<InsertOutcome, StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;

        let key = (record.ledger_sequence, record.pubkey);
        if records.contains_key(&key) {
            return Ok(InsertOutcome::Conflict);
        }

        records.insert(key, record.data);
        Ok(InsertOutcome::Inserted)
    }
}
