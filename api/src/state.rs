use std::sync::{Arc, Mutex, MutexGuard};

use pastry_store::PastryStore;
use pastry_types::Schema;

use crate::error::ApiError;

/// Shared application state.
///
/// Handlers hold the store guard for their whole lookup-check-mutate
/// sequence, so uniqueness and not-found checks cannot interleave.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<PastryStore>>,
    schema: Schema,
}

impl AppState {
    pub fn new(store: PastryStore, schema: Schema) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            schema,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Locks the store. A poisoned lock surfaces as an internal error.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, PastryStore>, ApiError> {
        self.store
            .lock()
            .map_err(|_| ApiError::Internal("pastry store lock poisoned".into()))
    }
}
