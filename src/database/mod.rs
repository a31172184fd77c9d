pub mod memory;
pub mod migrations;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod store;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{AppConfig, StorageBackend};

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use repository::Repository;
pub use store::{Direction, Entity, OrderBy, RecordUpdate, Store, StoreError};

/// Build the storage handle once at start-up. The returned handle is shared by
/// every request for the life of the process and closed on shutdown.
pub async fn connect(config: &AppConfig) -> Result<Arc<dyn Store>, StoreError> {
    match config.database.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory storage; content is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::Postgres => {
            let store = PgStore::connect(&config.database).await?;
            if config.database.auto_migrate {
                migrations::run(store.pool()).await?;
            } else {
                info!("Skipping migrations (DATABASE_AUTO_MIGRATE=false)");
            }
            Ok(Arc::new(store))
        }
    }
}
