use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::store::{stamp_new_record, stamp_update, Direction, Entity, OrderBy, RecordUpdate, Store, StoreError};

/// Process-local store used in development and tests.
///
/// Each table is a vector in insertion order. Batches are applied to a copy of
/// the table under the write lock and swapped in only once every update landed,
/// so readers never see a partial batch.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<Entity, Vec<Map<String, Value>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully formed row, bypassing id and timestamp assignment.
    /// Lets tests pin `created_at` values.
    pub async fn insert_raw(&self, entity: Entity, row: Map<String, Value>) {
        let mut tables = self.tables.write().await;
        tables.entry(entity).or_default().push(row);
    }

    pub async fn len(&self, entity: Entity) -> usize {
        self.tables.read().await.get(&entity).map_or(0, Vec::len)
    }

    pub async fn is_empty(&self, entity: Entity) -> bool {
        self.len(entity).await == 0
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_record(&self, entity: Entity, fields: Map<String, Value>) -> Result<Value, StoreError> {
        let row = stamp_new_record(entity, fields)?;
        let mut tables = self.tables.write().await;
        tables.entry(entity).or_default().push(row.clone());
        Ok(Value::Object(row))
    }

    async fn list_records(&self, entity: Entity, order_by: &OrderBy) -> Result<Vec<Value>, StoreError> {
        for (column, _) in &order_by.keys {
            if !entity.has_column(column) {
                return Err(StoreError::InvalidColumn {
                    entity,
                    column: column.to_string(),
                });
            }
        }

        let tables = self.tables.read().await;
        let Some(rows) = tables.get(&entity) else {
            return Ok(vec![]);
        };

        // Newest insert first, so equal sort keys fall back to most recent first
        let mut rows: Vec<&Map<String, Value>> = rows.iter().rev().collect();
        rows.sort_by(|a, b| {
            order_by
                .keys
                .iter()
                .map(|(column, direction)| {
                    let ord = compare_values(a.get(*column), b.get(*column));
                    match direction {
                        Direction::Asc => ord,
                        Direction::Desc => ord.reverse(),
                    }
                })
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        Ok(rows.into_iter().cloned().map(Value::Object).collect())
    }

    async fn batch_update(&self, entity: Entity, updates: Vec<RecordUpdate>) -> Result<Vec<Value>, StoreError> {
        let mut tables = self.tables.write().await;
        let mut staged = tables.get(&entity).cloned().unwrap_or_default();
        let mut results = Vec::with_capacity(updates.len());

        for update in updates {
            let fields = stamp_update(entity, update.fields)?;
            let row = staged
                .iter_mut()
                .find(|row| row.get("id").and_then(Value::as_str) == Some(update.id.as_str()))
                .ok_or_else(|| StoreError::NotFound {
                    entity,
                    id: update.id.clone(),
                })?;
            row.extend(fields);
            results.push(Value::Object(row.clone()));
        }

        tables.insert(entity, staged);
        Ok(results)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Total order over the JSON values a column can hold. Nulls sort first.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}
