use std::sync::Arc;

use crate::domain::Entity;
use crate::error::ClientError;
use crate::ports::{EntityService, Navigator};

/// Read-only view of a single entity.
pub struct DetailController<E: Entity> {
    entity: E,
    navigator: Arc<dyn Navigator>,
}

impl<E: Entity> DetailController<E> {
    pub fn new(entity: E, navigator: Arc<dyn Navigator>) -> Self {
        Self { entity, navigator }
    }

    /// Fetch the entity and open it.
    pub async fn load(
        service: &dyn EntityService<E>,
        id: &str,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ClientError> {
        let entity = service.find(id).await?;
        Ok(Self::new(entity, navigator))
    }

    pub fn entity(&self) -> &E {
        &self.entity
    }

    pub fn previous_state(&self) {
        self.navigator.previous_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::{CountingNavigator, MockEntityService};
    use crate::domain::Comment;

    fn comment() -> Comment {
        Comment {
            id: Some("123".to_string()),
            ..Comment::default()
        }
    }

    #[tokio::test]
    async fn test_load_opens_found_entity() {
        let service = MockEntityService::with_items(vec![comment()]);
        let navigator = Arc::new(CountingNavigator::default());

        let detail = DetailController::<Comment>::load(&service, "123", navigator.clone())
            .await
            .unwrap();

        assert_eq!(detail.entity(), &comment());
        detail.previous_state();
        assert_eq!(navigator.count(), 1);
    }

    #[tokio::test]
    async fn test_load_propagates_not_found() {
        let service = MockEntityService::<Comment>::default();

        let result = DetailController::<Comment>::load(
            &service,
            "404",
            Arc::new(CountingNavigator::default()),
        )
        .await;

        assert_eq!(result.err().and_then(|e| e.status()), Some(404));
    }
}
