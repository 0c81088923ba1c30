//! # QACM Shared
//!
//! Wire-level types exchanged with the blog backend.
//! Nothing in here knows about entities; it only describes how values look on the wire.

pub mod date;
pub mod dto;
pub mod response;

pub use dto::{Page, QueryCriteria, SortDirection};
pub use response::{ErrorResponse, FieldErrorDetail};
