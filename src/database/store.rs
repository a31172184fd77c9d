use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// Entities persisted by the content API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Faq,
    TechStack,
    Testimonial,
}

impl Entity {
    pub fn table_name(self) -> &'static str {
        match self {
            Entity::Faq => "faqs",
            Entity::TechStack => "tech_stacks",
            Entity::Testimonial => "testimonials",
        }
    }

    /// Every column the entity owns, in table order
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Entity::Faq => &["id", "question", "answer", "category", "order", "created_at", "updated_at"],
            Entity::TechStack => &[
                "id",
                "name",
                "icon",
                "category",
                "proficiency",
                "color",
                "description",
                "years",
                "projects",
                "created_at",
            ],
            Entity::Testimonial => &[
                "id",
                "content",
                "name",
                "position",
                "avatar",
                "company",
                "rating",
                "created_at",
                "updated_at",
            ],
        }
    }

    pub fn has_column(self, column: &str) -> bool {
        self.columns().contains(&column)
    }

    pub fn tracks_updates(self) -> bool {
        self.has_column("updated_at")
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Sort keys for `list_records`; the first key is primary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub keys: Vec<(&'static str, Direction)>,
}

impl OrderBy {
    pub fn new(column: &'static str, direction: Direction) -> Self {
        Self { keys: vec![(column, direction)] }
    }

    pub fn then(mut self, column: &'static str, direction: Direction) -> Self {
        self.keys.push((column, direction));
        self
    }

    pub fn newest_first() -> Self {
        Self::new("created_at", Direction::Desc)
    }
}

/// One "set these fields on this id" write inside a batch
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl RecordUpdate {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self { id: id.into(), fields }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} record '{id}' not found")]
    NotFound { entity: Entity, id: String },

    #[error("column '{column}' does not exist on {entity}")]
    InvalidColumn { entity: Entity, column: String },

    #[error("record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Storage port consumed by the handlers.
///
/// Records cross the port as JSON objects keyed by column name. Implementations
/// assign `id` and timestamps on create and must apply `batch_update` atomically:
/// either every update in the batch is visible afterwards or none is.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    async fn create_record(&self, entity: Entity, fields: Map<String, Value>) -> Result<Value, StoreError>;

    async fn list_records(&self, entity: Entity, order_by: &OrderBy) -> Result<Vec<Value>, StoreError>;

    /// Apply every update in one transaction. Returns the record produced by
    /// each update, in input order.
    async fn batch_update(&self, entity: Entity, updates: Vec<RecordUpdate>) -> Result<Vec<Value>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;

    /// Release connections on shutdown
    async fn close(&self) {}
}

/// Current time in the fixed-width form both backends store
pub(crate) fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Reject fields the entity has no column for
pub(crate) fn check_columns(entity: Entity, fields: &Map<String, Value>) -> Result<(), StoreError> {
    match fields.keys().find(|k| !entity.has_column(k)) {
        Some(column) => Err(StoreError::InvalidColumn {
            entity,
            column: column.clone(),
        }),
        None => Ok(()),
    }
}

/// Fill in the server-assigned columns of a new record
pub(crate) fn stamp_new_record(entity: Entity, mut fields: Map<String, Value>) -> Result<Map<String, Value>, StoreError> {
    check_columns(entity, &fields)?;
    let now = timestamp_now();
    fields.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
    fields.insert("created_at".into(), Value::String(now.clone()));
    if entity.tracks_updates() {
        fields.insert("updated_at".into(), Value::String(now));
    }
    Ok(fields)
}

/// Fill in the server-assigned columns of an update
pub(crate) fn stamp_update(entity: Entity, mut fields: Map<String, Value>) -> Result<Map<String, Value>, StoreError> {
    check_columns(entity, &fields)?;
    fields.remove("id");
    fields.remove("created_at");
    if entity.tracks_updates() {
        fields.insert("updated_at".into(), Value::String(timestamp_now()));
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn stamps_id_and_timestamps() {
        let rec = stamp_new_record(Entity::Testimonial, fields(json!({ "content": "great", "name": "Ada" }))).unwrap();
        assert!(Uuid::parse_str(rec["id"].as_str().unwrap()).is_ok());
        assert_eq!(rec["created_at"], rec["updated_at"]);
    }

    #[test]
    fn tech_stack_has_no_updated_at() {
        let rec = stamp_new_record(Entity::TechStack, fields(json!({ "name": "Rust" }))).unwrap();
        assert!(rec.get("created_at").is_some());
        assert!(rec.get("updated_at").is_none());
    }

    #[test]
    fn client_supplied_id_is_replaced() {
        let rec = stamp_new_record(Entity::Faq, fields(json!({ "id": "mine", "question": "q" }))).unwrap();
        assert_ne!(rec["id"], json!("mine"));
    }

    #[test]
    fn unknown_columns_are_rejected() {
        let err = stamp_new_record(Entity::Faq, fields(json!({ "question": "q", "bogus": 1 }))).unwrap_err();
        assert!(matches!(err, StoreError::InvalidColumn { column, .. } if column == "bogus"));
    }

    #[test]
    fn update_cannot_touch_identity() {
        let upd = stamp_update(Entity::Faq, fields(json!({ "id": "x", "order": 3 }))).unwrap();
        assert!(upd.get("id").is_none());
        assert_eq!(upd["order"], json!(3));
        assert!(upd.get("updated_at").is_some());
    }
}
