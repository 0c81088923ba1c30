//! REST implementations of the entity services.

mod client;
mod resource;

pub use client::{RestClient, RestConfig};
pub use resource::RestResource;

use qacm_core::domain::{Comment, Post, User};

/// REST post service.
pub type RestPostService = RestResource<Post>;

/// REST comment service.
pub type RestCommentService = RestResource<Comment>;

/// REST user lookup. Only `query` is available for users.
pub type RestUserService = RestResource<User>;
