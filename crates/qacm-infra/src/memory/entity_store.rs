//! In-memory entity service, mirroring the backend's CRUD rules.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use qacm_core::ClientError;
use qacm_core::domain::Entity;
use qacm_core::ports::{EntityService, QueryService};
use qacm_shared::{Page, QueryCriteria};

/// Entities kept in insertion order behind an async `RwLock`.
///
/// Identifiers are assigned on create as random UUID strings. Partial
/// updates follow [`Entity::merge_patch`].
pub struct InMemoryEntityService<E> {
    store: RwLock<Vec<E>>,
}

impl<E: Entity> InMemoryEntityService<E> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    /// Start with pre-existing records. Records without an id get one.
    pub fn with_entities(entities: impl IntoIterator<Item = E>) -> Self {
        let entities = entities
            .into_iter()
            .map(|mut entity| {
                if !entity.is_persisted() {
                    entity.set_id(Uuid::new_v4().to_string());
                }
                entity
            })
            .collect();
        Self {
            store: RwLock::new(entities),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    fn not_found(id: &str) -> ClientError {
        ClientError::NotFound {
            entity: E::NAME,
            id: id.to_string(),
        }
    }
}

impl<E: Entity> Default for InMemoryEntityService<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> QueryService<E> for InMemoryEntityService<E> {
    async fn query(&self, criteria: &QueryCriteria) -> Result<Page<E>, ClientError> {
        let store = self.store.read().await;
        let total = store.len() as u64;

        let items = match criteria.size {
            Some(size) => {
                let skip = criteria.page.unwrap_or(0) as usize * size as usize;
                store.iter().skip(skip).take(size as usize).cloned().collect()
            }
            None => store.clone(),
        };

        Ok(Page::new(items, Some(total)))
    }
}

#[async_trait]
impl<E: Entity> EntityService<E> for InMemoryEntityService<E> {
    async fn find(&self, id: &str) -> Result<E, ClientError> {
        let store = self.store.read().await;
        store
            .iter()
            .find(|e| e.id() == Some(id))
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, mut entity: E) -> Result<E, ClientError> {
        if entity.is_persisted() {
            return Err(ClientError::IdExists { entity: E::NAME });
        }
        entity.set_id(Uuid::new_v4().to_string());

        let mut store = self.store.write().await;
        store.push(entity.clone());
        tracing::debug!(entity = E::NAME, id = entity.id().unwrap_or_default(), "Created");
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, ClientError> {
        let id = entity
            .id()
            .ok_or(ClientError::IdMissing { entity: E::NAME })?
            .to_string();

        let mut store = self.store.write().await;
        let slot = store
            .iter_mut()
            .find(|e| e.id() == Some(id.as_str()))
            .ok_or_else(|| Self::not_found(&id))?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn partial_update(&self, patch: E) -> Result<E, ClientError> {
        let id = patch
            .id()
            .ok_or(ClientError::IdMissing { entity: E::NAME })?
            .to_string();

        let mut store = self.store.write().await;
        let slot = store
            .iter_mut()
            .find(|e| e.id() == Some(id.as_str()))
            .ok_or_else(|| Self::not_found(&id))?;
        slot.merge_patch(patch);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|e| e.id() != Some(id));

        if store.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
