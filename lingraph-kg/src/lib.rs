//! # Lingraph Knowledge Graph (lingraph-kg)
//!
//! Core query-composition library for the lingraph graph search tools: a
//! fixed bibliographic/hypothesis knowledge-graph schema, an inference
//! engine suggesting legal continuations while a user assembles a path
//! query, and pure renderers emitting Cypher-style query text for an
//! external graph browser.
//!
//! ## Features
//!
//! - Compiled-in schema registry: entry types, super types, and typed,
//!   direction-constrained relations with reverse aliases
//! - Entry catalog built once from the external entries/relations tables,
//!   read-only and freely shareable afterwards
//! - Candidate inference: which node types and relation names may legally
//!   follow the last token of a partially built query chain
//! - Four renderers: free chains, fan-out searches around key entries,
//!   canned author templates, and two-endpoint path search
//! - Per-mode, newest-first query history with a union-joined view
//!
//! ## Example
//!
//! ```
//! use lingraph_kg::render::chain_query;
//! use lingraph_kg::schema::SchemaRegistry;
//!
//! let registry = SchemaRegistry::new();
//! let chain: Vec<_> = ["publication", "truecite", "hypothesis"]
//!     .iter()
//!     .map(|raw| registry.classify(raw))
//!     .collect();
//!
//! assert_eq!(
//!     chain_query(&chain),
//!     "match p = (:publication) -[:truecite]-> (:hypothesis) return *, relationships(p)"
//! );
//! ```

pub mod catalog;
pub mod error;
pub mod history;
pub mod infer;
pub mod render;
pub mod schema;
pub mod token;

pub use catalog::{EntryCatalog, EntryKind, RelationEdge};
pub use error::{KgError, Result};
pub use history::{HistoryEntry, HistorySet, QueryHistory, QueryMode};
pub use infer::{candidates_after, Candidates, EdgeSuggestion};
pub use render::{author_query, chain_query, fanout_query, path_query, AuthorTemplate};
pub use schema::{
    EndpointType, EntrySuperType, EntryType, RelationType, ReverseRelation, SchemaRegistry,
};
pub use token::Token;
