//! # QACM Infrastructure
//!
//! Concrete implementations of the ports defined in `qacm-core`.
//!
//! - [`http`] talks to the blog backend over REST/JSON with `reqwest`.
//! - [`memory`] keeps everything in process; used when no backend is
//!   configured and as a stand-in for demos.

pub mod http;
pub mod memory;

// Re-exports - REST
pub use http::{
    RestClient, RestCommentService, RestConfig, RestPostService, RestResource, RestUserService,
};

// Re-exports - In-Memory
pub use memory::{HistoryNavigator, InMemoryEntityService, InMemoryUserService};
