use std::sync::Arc;

use sea_orm::ActiveValue::{NotSet, Set};
use tracing::{info, instrument};

use models::property;

use crate::errors::ServiceError;
use crate::property::repository::PropertyRepository;

/// Application service encapsulating property business rules: the store
/// assigns ids on create, existence is checked before update/delete, and a
/// full-row save replaces every field of an updated record.
pub struct PropertyService {
    repo: Arc<dyn PropertyRepository>,
}

impl PropertyService {
    pub fn new(repo: Arc<dyn PropertyRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, description))]
    pub async fn create(
        &self,
        address: String,
        description: Option<String>,
        price: f64,
        size: f64,
    ) -> Result<property::Model, ServiceError> {
        let am = property::ActiveModel {
            id: NotSet,
            address: Set(address),
            description: Set(description),
            price: Set(price),
            size: Set(size),
        };
        let created = self.repo.save(am).await?;
        info!(id = created.id, "created property");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<property::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<property::Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Full replacement. Returns `None` without mutating anything when no
    /// row exists for `id`; the caller's id argument always wins over
    /// whatever id the payload carried.
    pub async fn update(
        &self,
        id: i64,
        address: String,
        description: Option<String>,
        price: f64,
        size: f64,
    ) -> Result<Option<property::Model>, ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Ok(None);
        }
        let am = property::ActiveModel {
            id: Set(id),
            address: Set(address),
            description: Set(description),
            price: Set(price),
            size: Set(size),
        };
        let updated = self.repo.save(am).await?;
        info!(id = updated.id, "updated property");
        Ok(Some(updated))
    }

    /// Returns `false` without deleting when no row exists for `id`.
    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Ok(false);
        }
        self.repo.delete_by_id(id).await?;
        info!(id, "deleted property");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::InMemoryPropertyStore;

    fn service() -> PropertyService {
        PropertyService::new(Arc::new(InMemoryPropertyStore::new()))
    }

    #[tokio::test]
    async fn create_assigns_id_and_round_trips() -> Result<(), ServiceError> {
        let svc = service();
        let created = svc
            .create("Calle 1 No. 2-3".into(), Some("Casa".into()), 256.0, 10.5)
            .await?;
        assert!(created.id > 0);
        assert_eq!(created.address, "Calle 1 No. 2-3");
        assert_eq!(created.description.as_deref(), Some("Casa"));
        assert_eq!(created.price, 256.0);
        assert_eq!(created.size, 10.5);

        let fetched = svc.get(created.id).await?.expect("created row");
        assert_eq!(fetched, created);
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_is_none() -> Result<(), ServiceError> {
        let svc = service();
        assert!(svc.get(42).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn list_returns_everything() -> Result<(), ServiceError> {
        let svc = service();
        svc.create("Calle 1 No. 2-3".into(), None, 1.0, 1.0).await?;
        svc.create("Calle 2 No. 3-4".into(), None, 2.0, 2.0).await?;
        let all = svc.list().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].address, "Calle 1 No. 2-3");
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_is_none_and_mutates_nothing() -> Result<(), ServiceError> {
        let svc = service();
        let created = svc.create("Calle 1 No. 2-3".into(), Some("Casa".into()), 256.0, 10.5).await?;

        let missing = svc
            .update(created.id + 100, "Calle 2 No. 3-4".into(), None, 567.0, 15.0)
            .await?;
        assert!(missing.is_none());

        let all = svc.list().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], created);
        Ok(())
    }

    #[tokio::test]
    async fn update_is_a_full_replacement_pinned_to_the_id() -> Result<(), ServiceError> {
        let svc = service();
        let created = svc.create("Calle 1 No. 2-3".into(), Some("Casa".into()), 256.0, 10.5).await?;

        let updated = svc
            .update(created.id, "Calle 2 No. 3-4".into(), Some("Actualizado".into()), 567.0, 15.0)
            .await?
            .expect("existing row");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.address, "Calle 2 No. 3-4");
        assert_eq!(updated.description.as_deref(), Some("Actualizado"));
        assert_eq!(updated.price, 567.0);
        assert_eq!(updated.size, 15.0);

        // omitted description is cleared, not preserved
        let cleared = svc
            .update(created.id, "Calle 2 No. 3-4".into(), None, 567.0, 15.0)
            .await?
            .expect("existing row");
        assert_eq!(cleared.description, None);
        Ok(())
    }

    #[tokio::test]
    async fn delete_reports_absence_and_never_errors() -> Result<(), ServiceError> {
        let svc = service();
        let created = svc.create("Calle 1 No. 2-3".into(), None, 256.0, 10.5).await?;

        assert!(svc.delete(created.id).await?);
        assert!(svc.get(created.id).await?.is_none());
        // second delete reports not-found instead of failing
        assert!(!svc.delete(created.id).await?);
        Ok(())
    }
}
