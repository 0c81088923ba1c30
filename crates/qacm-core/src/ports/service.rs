use async_trait::async_trait;
use qacm_shared::{Page, QueryCriteria};

use crate::domain::{Entity, Resource};
use crate::error::ClientError;

/// Read access to a collection resource.
#[async_trait]
pub trait QueryService<T: Resource>: Send + Sync {
    /// Fetch one page of the collection.
    async fn query(&self, criteria: &QueryCriteria) -> Result<Page<T>, ClientError>;
}

/// Full CRUD access to an entity resource.
#[async_trait]
pub trait EntityService<E: Entity>: QueryService<E> {
    /// Fetch one record by identifier.
    async fn find(&self, id: &str) -> Result<E, ClientError>;

    /// Create a transient entity. Fails with `IdExists` if it already has an id.
    async fn create(&self, entity: E) -> Result<E, ClientError>;

    /// Replace a persisted entity. Fails with `IdMissing` if it has no id.
    async fn update(&self, entity: E) -> Result<E, ClientError>;

    /// Merge the provided fields into a persisted entity.
    async fn partial_update(&self, entity: E) -> Result<E, ClientError>;

    /// Delete a record. `Ok` means the backend acknowledged with a 2xx.
    async fn delete(&self, id: &str) -> Result<(), ClientError>;
}

/// Service handles for the blog entities.
pub type PostService = dyn EntityService<crate::domain::Post>;
pub type CommentService = dyn EntityService<crate::domain::Comment>;
pub type UserService = dyn QueryService<crate::domain::User>;
