//! Edit forms backing the update controllers.
//!
//! A form holds the editable state of one entity plus its single mandatory
//! relation. `validate` is the only way back to an entity, so nothing with a
//! missing required field ever reaches a service.

mod comment;
mod post;

pub use comment::CommentForm;
pub use post::PostForm;

use crate::domain::{Entity, Resource};
use crate::error::ValidationErrors;

pub trait EntityForm: Default + Clone + Send + Sync + 'static {
    type Entity: Entity;
    /// Type offered in the relation selector.
    type Related: Resource;

    /// Populate every field from `entity`.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Currently selected relation.
    fn relation(&self) -> Option<&Self::Related>;

    fn set_relation(&mut self, related: Option<Self::Related>);

    /// Read the form back into an entity, checking required fields.
    fn validate(&self) -> Result<Self::Entity, ValidationErrors>;
}
