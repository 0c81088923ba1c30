//! Ports - trait definitions for the backend and the hosting UI.
//! Infrastructure implements these; controllers only see the traits.

mod navigation;
mod service;

pub use navigation::Navigator;
pub use service::{CommentService, EntityService, PostService, QueryService, UserService};
