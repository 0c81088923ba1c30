use crate::domain::Entity;
use crate::error::ClientError;
use crate::ports::EntityService;

/// Produce the entity an edit or detail route opens with: the stored record
/// when an id is given, a fresh transient one otherwise.
pub async fn resolve<E: Entity>(
    service: &dyn EntityService<E>,
    id: Option<&str>,
) -> Result<E, ClientError> {
    match id {
        Some(id) => service.find(id).await,
        None => Ok(E::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::MockEntityService;
    use crate::domain::{Identified, Post};

    #[tokio::test]
    async fn test_without_id_yields_transient_entity() {
        let service = MockEntityService::<Post>::default();
        let post = resolve::<Post>(&service, None).await.unwrap();
        assert!(!post.is_persisted());
    }

    #[tokio::test]
    async fn test_with_id_finds_entity() {
        let service = MockEntityService::with_items(vec![Post::with_id("ABC")]);
        let post = resolve::<Post>(&service, Some("ABC")).await.unwrap();
        assert_eq!(post.id(), Some("ABC"));
    }
}
