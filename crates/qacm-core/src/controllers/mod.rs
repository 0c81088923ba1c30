//! View controllers - the state behind the list, detail and edit screens.
//!
//! Each controller receives its collaborators as trait objects so the hosting
//! front end (or a test) decides what sits behind them.

mod detail;
mod list;
mod route;
mod update;

pub use detail::DetailController;
pub use list::ListController;
pub use route::resolve;
pub use update::{CommentUpdateController, PostUpdateController, UpdateController};

#[cfg(test)]
pub(crate) mod test_support;
