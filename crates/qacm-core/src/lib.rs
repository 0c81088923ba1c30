//! # QACM Core
//!
//! The client-side domain layer for the blog backend.
//! Entities, the service and navigation ports, form validation and the
//! list/detail/update controllers. No HTTP code lives here.

pub mod collection;
pub mod controllers;
pub mod domain;
pub mod error;
pub mod form;
pub mod ports;

pub use collection::{add_to_collection_if_missing, same_identity};
pub use error::{ClientError, SaveError, ValidationErrors};
