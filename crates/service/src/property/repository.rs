use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TryIntoModel};

use models::property;

use crate::errors::ServiceError;

/// Storage port for property records. Mirrors what the relational store
/// offers: generic persistence plus one exact-match lookup on `address`.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Insert when the primary key is unset (the store assigns the id),
    /// full-row update when it is set. The returned model always carries
    /// the populated id.
    async fn save(&self, property: property::ActiveModel) -> Result<property::Model, ServiceError>;
    /// All rows, storage-defined order.
    async fn find_all(&self) -> Result<Vec<property::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<property::Model>, ServiceError>;
    /// No-op when the row is absent.
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    /// Exact string match; duplicates are expected.
    async fn find_by_address(&self, address: &str) -> Result<Vec<property::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPropertyRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PropertyRepository for SeaOrmPropertyRepository {
    async fn save(&self, property: property::ActiveModel) -> Result<property::Model, ServiceError> {
        let saved = property
            .save(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        saved.try_into_model().map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<property::Model>, ServiceError> {
        property::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<property::Model>, ServiceError> {
        property::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        property::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let found = property::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.is_some())
    }

    async fn find_by_address(&self, address: &str) -> Result<Vec<property::Model>, ServiceError> {
        property::Entity::find()
            .filter(property::Column::Address.eq(address))
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}
