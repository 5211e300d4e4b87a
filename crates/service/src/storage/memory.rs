use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use sea_orm::ActiveValue;
use tokio::sync::RwLock;

use models::property;

use crate::errors::ServiceError;
use crate::property::repository::PropertyRepository;

/// In-memory implementation of the property storage port.
///
/// Rows live in a `BTreeMap` behind an async lock and ids come from an
/// atomic counter. Intended for lightweight deployments and tests where a
/// database is overkill.
pub struct InMemoryPropertyStore {
    rows: RwLock<BTreeMap<i64, property::Model>>,
    next_id: AtomicI64,
}

impl InMemoryPropertyStore {
    pub fn new() -> Self {
        Self { rows: RwLock::new(BTreeMap::new()), next_id: AtomicI64::new(1) }
    }
}

impl Default for InMemoryPropertyStore {
    fn default() -> Self {
        Self::new()
    }
}

fn required<T>(value: ActiveValue<T>, field: &str) -> Result<T, ServiceError>
where
    T: Into<sea_orm::Value>,
{
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Ok(v),
        ActiveValue::NotSet => Err(ServiceError::Validation(format!("missing field: {field}"))),
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyStore {
    async fn save(&self, property: property::ActiveModel) -> Result<property::Model, ServiceError> {
        let mut rows = self.rows.write().await;
        let id = match &property.id {
            ActiveValue::Set(id) | ActiveValue::Unchanged(id) => *id,
            ActiveValue::NotSet => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        let model = property::Model {
            id,
            address: required(property.address, "address")?,
            description: required(property.description, "description")?,
            price: required(property.price, "price")?,
            size: required(property.size, "size")?,
        };
        rows.insert(id, model.clone());
        // Keep the counter ahead of explicitly supplied ids.
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        Ok(model)
    }

    async fn find_all(&self) -> Result<Vec<property::Model>, ServiceError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<property::Model>, ServiceError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.rows.write().await.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.rows.read().await.contains_key(&id))
    }

    async fn find_by_address(&self, address: &str) -> Result<Vec<property::Model>, ServiceError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|p| p.address == address)
            .cloned()
            .collect())
    }
}
