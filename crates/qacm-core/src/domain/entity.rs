use serde::Serialize;
use serde::de::DeserializeOwned;

/// Anything that carries a stable, server-assigned identifier.
///
/// `None` marks a transient instance that has never been saved.
pub trait Identified {
    fn id(&self) -> Option<&str>;

    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

/// A record type reachable under `/api/{PATH}`.
pub trait Resource:
    Identified + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Singular name used in logs and error messages.
    const NAME: &'static str;
    /// Collection path segment, e.g. `posts`.
    const PATH: &'static str;
}

/// A resource the client may create, update and delete.
pub trait Entity: Resource + Default {
    fn set_id(&mut self, id: String);

    /// Apply a partial update: every field present in `patch` overwrites
    /// the current value, absent fields are left alone.
    fn merge_patch(&mut self, patch: Self);
}
