use async_trait::async_trait;

use crate::errors::ServiceError;

/// Persistence contract consumed by the admin service.
///
/// `save` inserts when the record has no id (the store assigns one) and
/// updates otherwise.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Send + 'static,
{
    async fn find_all(&self) -> Result<Vec<T>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, ServiceError>;
    async fn save(&self, record: T) -> Result<T, ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// Simple in-memory repository for tests and the `memory` storage backend
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    use crate::admin::domain::Identified;

    struct State<T> {
        rows: BTreeMap<i64, T>, // key: id, iteration order == store order
        next_id: i64,
        writes: u64,
    }

    pub struct InMemoryRepository<T> {
        inner: RwLock<State<T>>,
    }

    impl<T> Default for InMemoryRepository<T> {
        fn default() -> Self {
            Self { inner: RwLock::new(State { rows: BTreeMap::new(), next_id: 1, writes: 0 }) }
        }
    }

    impl<T> InMemoryRepository<T> {
        pub fn new() -> Self { Self::default() }

        /// Number of `save` and `delete_by_id` calls served so far.
        pub async fn writes(&self) -> u64 {
            self.inner.read().await.writes
        }
    }

    #[async_trait]
    impl<T> Repository<T> for InMemoryRepository<T>
    where
        T: Identified + Clone + Send + Sync + 'static,
    {
        async fn find_all(&self) -> Result<Vec<T>, ServiceError> {
            let state = self.inner.read().await;
            Ok(state.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<T>, ServiceError> {
            let state = self.inner.read().await;
            Ok(state.rows.get(&id).cloned())
        }

        async fn save(&self, record: T) -> Result<T, ServiceError> {
            let mut state = self.inner.write().await;
            state.writes += 1;
            let id = match record.id() {
                Some(id) => {
                    state.next_id = state.next_id.max(id + 1);
                    id
                }
                None => {
                    let id = state.next_id;
                    state.next_id += 1;
                    id
                }
            };
            let stored = record.with_id(id);
            state.rows.insert(id, stored.clone());
            Ok(stored)
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.inner.read().await.rows.contains_key(&id))
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            let mut state = self.inner.write().await;
            state.writes += 1;
            state.rows.remove(&id);
            Ok(())
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            Ok(self.inner.read().await.rows.len() as u64)
        }
    }

}
