//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Collection number of a card definition
//! - `Tag`: Semantic category used by criteria
//! - `CardDefinition`: Immutable template with tags and abilities
//! - `CardInstance`: A copy in play with a unique id and usage counters
//! - `CardPatch`: Partial update applied by the zone store
//! - `CardRegistry`: Catalog of definitions

pub mod definition;
pub mod instance;
pub mod registry;
pub mod tags;

pub use definition::{CardDefinition, CardId};
pub use instance::{CardInstance, CardPatch};
pub use registry::{CardRegistry, RegistryError};
pub use tags::Tag;
