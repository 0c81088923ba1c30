//! Hand-rolled port doubles for controller tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use qacm_shared::{Page, QueryCriteria};
use tokio::sync::oneshot;

use crate::domain::{Entity, Resource};
use crate::error::ClientError;
use crate::ports::{EntityService, Navigator, QueryService};

/// Records every call. Saves succeed immediately unless a gate is set, in
/// which case the first save waits for the gate's verdict.
pub struct MockEntityService<E> {
    items: Mutex<Vec<E>>,
    created: Mutex<Vec<E>>,
    updated: Mutex<Vec<E>>,
    deleted: Mutex<Vec<String>>,
    queries: AtomicUsize,
    gate: Mutex<Option<oneshot::Receiver<Result<(), ClientError>>>>,
}

impl<E> Default for MockEntityService<E> {
    fn default() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            queries: AtomicUsize::new(0),
            gate: Mutex::new(None),
        }
    }
}

impl<E: Entity> MockEntityService<E> {
    pub fn with_items(items: Vec<E>) -> Self {
        let service = Self::default();
        *service.items.lock().unwrap() = items;
        service
    }

    pub fn gated(gate: oneshot::Receiver<Result<(), ClientError>>) -> Self {
        let service = Self::default();
        *service.gate.lock().unwrap() = Some(gate);
        service
    }

    pub fn created(&self) -> Vec<E> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<E> {
        self.updated.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    async fn settle(&self, mut entity: E) -> Result<E, ClientError> {
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.await.unwrap_or(Ok(()))?;
        }
        if entity.id().is_none() {
            entity.set_id("generated-id".to_string());
        }
        Ok(entity)
    }
}

#[async_trait]
impl<E: Entity> QueryService<E> for MockEntityService<E> {
    async fn query(&self, _criteria: &QueryCriteria) -> Result<Page<E>, ClientError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let items = self.items.lock().unwrap().clone();
        let total = items.len() as u64;
        Ok(Page::new(items, Some(total)))
    }
}

#[async_trait]
impl<E: Entity> EntityService<E> for MockEntityService<E> {
    async fn find(&self, id: &str) -> Result<E, ClientError> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id() == Some(id))
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                entity: E::NAME,
                id: id.to_string(),
            })
    }

    async fn create(&self, entity: E) -> Result<E, ClientError> {
        self.created.lock().unwrap().push(entity.clone());
        self.settle(entity).await
    }

    async fn update(&self, entity: E) -> Result<E, ClientError> {
        self.updated.lock().unwrap().push(entity.clone());
        self.settle(entity).await
    }

    async fn partial_update(&self, entity: E) -> Result<E, ClientError> {
        self.updated.lock().unwrap().push(entity.clone());
        self.settle(entity).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.deleted.lock().unwrap().push(id.to_string());
        self.items.lock().unwrap().retain(|e| e.id() != Some(id));
        Ok(())
    }
}

/// Fixed query results for relation options.
pub struct MockQueryService<T> {
    items: Vec<T>,
    fail: bool,
}

impl<T: Resource> MockQueryService<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            items: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl<T: Resource> QueryService<T> for MockQueryService<T> {
    async fn query(&self, _criteria: &QueryCriteria) -> Result<Page<T>, ClientError> {
        if self.fail {
            return Err(ClientError::Transport {
                url: format!("/api/{}", T::PATH),
                message: "connection refused".to_string(),
            });
        }
        Ok(Page::from(self.items.clone()))
    }
}

#[derive(Default)]
pub struct CountingNavigator {
    count: AtomicUsize,
}

impl CountingNavigator {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Navigator for CountingNavigator {
    fn previous_state(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
