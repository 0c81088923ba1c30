//! Domain entities - the records exposed by the backend.

mod comment;
mod entity;
mod post;
mod user;

pub use comment::Comment;
pub use entity::{Entity, Identified, Resource};
pub use post::Post;
pub use user::User;
