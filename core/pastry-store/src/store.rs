use pastry_types::{PastryId, PastryInput, PastryRecord, PastryUpdate, SchemaProfile, names_match};

use crate::error::{StoreError, StoreResult};
use crate::seed::seed_records;

/// Insertion-ordered pastry collection.
#[derive(Debug, Clone, Default)]
pub struct PastryStore {
    records: Vec<PastryRecord>,
    /// Highest id ever issued, including ids of deleted records.
    high_water: Option<PastryId>,
}

impl PastryStore {
    /// Creates an empty store. The first create is assigned id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the seed records for `profile`.
    pub fn seeded(profile: SchemaProfile) -> Self {
        Self::from_records(seed_records(profile))
    }

    /// Creates a store from existing records, keeping their order and ids.
    pub fn from_records(records: Vec<PastryRecord>) -> Self {
        let high_water = records.iter().map(|r| r.id).max();
        Self {
            records,
            high_water,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order. An empty store is reported as
    /// [`StoreError::Empty`].
    pub fn list(&self) -> StoreResult<&[PastryRecord]> {
        if self.records.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(&self.records)
    }

    /// Appends a new record under the next id.
    pub fn create(&mut self, input: PastryInput) -> StoreResult<PastryRecord> {
        self.ensure_name_free(&input.name, None)?;

        let id = self.next_id();
        let record = PastryRecord::from_input(id, input);
        self.records.push(record.clone());
        self.high_water = Some(id);
        Ok(record)
    }

    pub fn find_by_id(&self, id: PastryId) -> StoreResult<&PastryRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Applies a partial update in place and returns the updated record.
    ///
    /// A new name is checked against every other record; renaming a record to
    /// a differently-cased form of its own name is allowed.
    pub fn update(&mut self, id: PastryId, update: PastryUpdate) -> StoreResult<PastryRecord> {
        let index = self.position(id)?;
        if let Some(name) = update.name.as_deref() {
            self.ensure_name_free(name, Some(id))?;
        }

        let record = &mut self.records[index];
        record.apply(update);
        Ok(record.clone())
    }

    /// Removes a record and returns it as it was before removal.
    pub fn delete(&mut self, id: PastryId) -> StoreResult<PastryRecord> {
        let index = self.position(id)?;
        Ok(self.records.remove(index))
    }

    fn position(&self, id: PastryId) -> StoreResult<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn next_id(&self) -> PastryId {
        let max_live = self.records.iter().map(|r| r.id).max();
        max_live
            .max(self.high_water)
            .map_or(PastryId::FIRST, PastryId::next)
    }

    fn ensure_name_free(&self, name: &str, except: Option<PastryId>) -> StoreResult<()> {
        let taken = self
            .records
            .iter()
            .filter(|r| Some(r.id) != except)
            .any(|r| names_match(&r.name, name));
        if taken {
            return Err(StoreError::Conflict(name.to_string()));
        }
        Ok(())
    }
}
