use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// A persisted entity stored as a JSON body in its own collection.
///
/// Documents relate to each other only through id references; the store
/// never joins them.
pub trait Document: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// Table backing this collection.
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;

    /// Bumps `updatedAt` before a save.
    fn touch(&mut self);
}
