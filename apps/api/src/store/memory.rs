use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeInput, ResumeRecord};
use crate::store::ResumeStore;

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryResumeStore {
    records: RwLock<HashMap<Uuid, ResumeRecord>>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner: Uuid,
    ) -> Result<Option<ResumeRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records.get(&id).filter(|r| r.user_id == owner).cloned())
    }

    async fn find_all_by_owner(&self, owner: Uuid) -> Result<Vec<ResumeRecord>, AppError> {
        let records = self.records.read().await;
        let mut owned: Vec<ResumeRecord> = records
            .values()
            .filter(|r| r.user_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn create(&self, owner: Uuid, input: ResumeInput) -> Result<ResumeRecord, AppError> {
        let record = ResumeRecord::new(owner, input);
        self.records.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        owner: Uuid,
        input: ResumeInput,
    ) -> Result<Option<ResumeRecord>, AppError> {
        let mut records = self.records.write().await;
        match records.get_mut(&id).filter(|r| r.user_id == owner) {
            Some(record) => {
                record.apply_update(input);
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        let owned = records.get(&id).is_some_and(|r| r.user_id == owner);
        if owned {
            records.remove(&id);
        }
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str) -> ResumeInput {
        ResumeInput {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_lookup_is_owner_scoped() {
        let store = MemoryResumeStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let record = store.create(alice, input("Alice CV")).await.unwrap();

        assert!(store
            .find_by_id_and_owner(record.id, alice)
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_by_id_and_owner(record.id, bob)
            .await
            .unwrap()
            .is_none());
        assert!(store.find_all_by_owner(bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_respect_owner() {
        let store = MemoryResumeStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let record = store.create(alice, input("Draft")).await.unwrap();

        assert!(store
            .update(record.id, bob, input("Hijack"))
            .await
            .unwrap()
            .is_none());
        let updated = store
            .update(record.id, alice, input("Final"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Final");

        assert!(!store.delete(record.id, bob).await.unwrap());
        assert!(store.delete(record.id, alice).await.unwrap());
        assert!(!store.delete(record.id, alice).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_returns_only_owned_records() {
        let store = MemoryResumeStore::new();
        let alice = Uuid::new_v4();
        store.create(alice, input("One")).await.unwrap();
        store.create(alice, input("Two")).await.unwrap();
        store.create(Uuid::new_v4(), input("Other")).await.unwrap();

        let list = store.find_all_by_owner(alice).await.unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|r| r.user_id == alice));
    }
}
