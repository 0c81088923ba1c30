//! In-process implementations - used when no backend is configured.
//! Data is lost on process restart.

mod entity_store;
mod history;
mod users;

pub use entity_store::InMemoryEntityService;
pub use history::HistoryNavigator;
pub use users::InMemoryUserService;
