//! Knowledge graph schema module
//!
//! This module defines the fixed schema of the knowledge graph: entry types
//! and their super types, relation types with directional endpoint
//! constraints, reverse aliases, and the [`SchemaRegistry`] handle that
//! resolves raw labels at the input boundary.

pub mod registry;
pub mod relations;
pub mod types;

pub use registry::SchemaRegistry;
pub use relations::{RelationType, ReverseRelation};
pub use types::{EndpointType, EntrySuperType, EntryType};
