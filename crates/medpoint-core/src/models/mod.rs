//! Domain models for the medical point system.

mod attendance;
mod hospital;
mod pharmacy;
mod soldier;

pub use attendance::*;
pub use hospital::*;
pub use pharmacy::*;
pub use soldier::*;

use serde::{de::DeserializeOwned, Serialize};

/// A record stored in one of the four persisted collections.
///
/// Ids are uuid-v4 strings, unique within a collection, assigned at creation
/// and never reused.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// The record's unique id.
    fn id(&self) -> &str;

    /// Replace the id (update preserves the original id this way).
    fn set_id(&mut self, id: String);
}
