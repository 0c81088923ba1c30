use std::sync::Arc;

use qacm_shared::QueryCriteria;

use crate::domain::Entity;
use crate::error::ClientError;
use crate::ports::EntityService;

/// Paged list of one entity type with delete.
pub struct ListController<E: Entity> {
    service: Arc<dyn EntityService<E>>,
    criteria: QueryCriteria,
    entities: Vec<E>,
    total_count: Option<u64>,
    is_loading: bool,
}

impl<E: Entity> ListController<E> {
    pub fn new(service: Arc<dyn EntityService<E>>, criteria: QueryCriteria) -> Self {
        Self {
            service,
            criteria,
            entities: Vec::new(),
            total_count: None,
            is_loading: false,
        }
    }

    /// Fetch the page described by the current criteria.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.is_loading = true;
        let result = self.service.query(&self.criteria).await;
        self.is_loading = false;

        let page = result?;
        self.total_count = page.total_count;
        self.entities = page.items;
        Ok(())
    }

    pub async fn load_page(&mut self, page: u32) -> Result<(), ClientError> {
        self.criteria.page = Some(page);
        self.load().await
    }

    /// Delete a row, then re-fetch so paging stays consistent.
    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        self.service.delete(id).await?;
        tracing::info!(entity = E::NAME, id = %id, "Deleted");
        self.load().await
    }

    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn criteria(&self) -> &QueryCriteria {
        &self.criteria
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Stable row key for rendering.
    pub fn track_id<'a>(&self, entity: &'a E) -> Option<&'a str> {
        entity.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::MockEntityService;
    use crate::domain::Post;

    #[tokio::test]
    async fn test_load_fills_rows_and_total() {
        let service = Arc::new(MockEntityService::with_items(vec![
            Post::with_id("a"),
            Post::with_id("b"),
        ]));
        let mut list = ListController::new(service.clone(), QueryCriteria::new().size(20));

        list.load().await.unwrap();

        assert_eq!(list.entities().len(), 2);
        assert_eq!(list.total_count(), Some(2));
        assert!(!list.is_loading());
    }

    #[tokio::test]
    async fn test_delete_refetches() {
        let service = Arc::new(MockEntityService::with_items(vec![
            Post::with_id("a"),
            Post::with_id("b"),
        ]));
        let mut list = ListController::new(service.clone(), QueryCriteria::new());
        list.load().await.unwrap();

        list.delete("a").await.unwrap();

        assert_eq!(service.deleted(), vec!["a".to_string()]);
        assert_eq!(service.query_count(), 2);
        let ids: Vec<_> = list.entities().iter().filter_map(|p| list.track_id(p)).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[tokio::test]
    async fn test_load_page_updates_criteria() {
        let service = Arc::new(MockEntityService::<Post>::default());
        let mut list = ListController::new(service, QueryCriteria::new());

        list.load_page(3).await.unwrap();

        assert_eq!(list.criteria().page, Some(3));
    }
}
