use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::database::models::Model;
use crate::database::store::{OrderBy, RecordUpdate, Store, StoreError};

/// Typed access to one entity through the storage port
pub struct Repository<T> {
    store: Arc<dyn Store>,
    _phantom: PhantomData<T>,
}

impl<T: Model> Repository<T> {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            _phantom: PhantomData,
        }
    }

    pub async fn select_all(&self, order_by: &OrderBy) -> Result<Vec<T>, StoreError> {
        let rows = self.store.list_records(T::ENTITY, order_by).await?;
        rows.into_iter().map(decode).collect()
    }

    pub async fn create_one<N: Serialize>(&self, input: &N) -> Result<T, StoreError> {
        let row = self.store.create_record(T::ENTITY, to_fields(input)?).await?;
        decode(row)
    }

    pub async fn update_all(&self, updates: Vec<RecordUpdate>) -> Result<Vec<T>, StoreError> {
        let rows = self.store.batch_update(T::ENTITY, updates).await?;
        rows.into_iter().map(decode).collect()
    }
}

fn decode<T: Model>(row: Value) -> Result<T, StoreError> {
    Ok(serde_json::from_value(row)?)
}

fn to_fields<N: Serialize>(input: &N) -> Result<Map<String, Value>, StoreError> {
    Ok(serde_json::from_value(serde_json::to_value(input)?)?)
}
