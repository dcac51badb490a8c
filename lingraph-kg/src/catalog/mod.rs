//! In-memory entry and relation-edge catalog
//!
//! Built once from the external entries/relations tables at session start,
//! read-only afterwards. Indexes entries by name and relation edges by
//! endpoint name in both directions.

mod loader;

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{KgError, Result};
use crate::schema::{EndpointType, EntrySuperType, EntryType, RelationType};

/// What the catalog knows a name to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A typed entry from the entries table
    Entry(EntryType),
    /// An author, serialized as `"<name>, <id>"`
    Author,
}

impl EntryKind {
    /// The type label shown to the user
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Entry(t) => t.as_str(),
            EntryKind::Author => "author",
        }
    }

    /// The super type, where the kind has one
    pub fn super_type(&self) -> Option<EntrySuperType> {
        match self {
            EntryKind::Entry(t) => Some(t.super_type()),
            EntryKind::Author => None,
        }
    }
}

/// A directed, typed relation edge between two named entries
///
/// Multiple edges between the same pair are allowed (different relation
/// types).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEdge {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub relation: RelationType,
    pub from_type: EndpointType,
    pub to_type: EndpointType,
}

/// In-memory index of known entries and their relation edges
#[derive(Debug)]
pub struct EntryCatalog {
    entries: HashMap<String, EntryKind>,
    edges: Vec<RelationEdge>,
    by_from: HashMap<String, Vec<usize>>,
    by_to: HashMap<String, Vec<usize>>,
    author_name: Regex,
}

impl EntryCatalog {
    /// Build a catalog from already-parsed tables
    ///
    /// Duplicate entry names keep the first row; later rows are skipped with
    /// a warning.
    pub fn new(entries: Vec<(String, EntryKind)>, edges: Vec<RelationEdge>) -> Self {
        let mut entry_map = HashMap::with_capacity(entries.len());
        for (name, kind) in entries {
            if entry_map.contains_key(&name) {
                warn!(name = %name, "duplicate entry name, keeping first row");
                continue;
            }
            entry_map.insert(name, kind);
        }

        let mut by_from: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_to: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, edge) in edges.iter().enumerate() {
            by_from.entry(edge.from.clone()).or_default().push(index);
            by_to.entry(edge.to.clone()).or_default().push(index);
        }

        Self {
            entries: entry_map,
            edges,
            by_from,
            by_to,
            // Author identities are assumed valid without existence-checking
            author_name: Regex::new(r".+, [0-9]{5,}$").unwrap(),
        }
    }

    /// Load a catalog from the external TSV tables
    ///
    /// Fails with [`KgError::MissingExternalData`] when either table is
    /// absent or its header is malformed; the session must refuse to start.
    pub fn load(entries_path: &Path, relations_path: &Path) -> Result<Self> {
        loader::load(entries_path, relations_path)
    }

    /// Number of known entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of loaded relation edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether a name resolves to a known entry (or to an author by the
    /// naming convention)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name) || self.author_name.is_match(name)
    }

    /// The kind of a named entry
    ///
    /// Any name matching the `"<text>, <5+ digits>"` convention is an
    /// author, without a table lookup; otherwise the name must be present in
    /// the loaded entries or the lookup fails with
    /// [`KgError::UnknownEntry`].
    pub fn type_of(&self, name: &str) -> Result<EntryKind> {
        if self.author_name.is_match(name) {
            return Ok(EntryKind::Author);
        }
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| KgError::UnknownEntry(name.to_string()))
    }

    /// Relation edges whose source is `name`, in load order
    pub fn outgoing(&self, name: &str) -> Vec<&RelationEdge> {
        self.by_from
            .get(name)
            .map(|indexes| indexes.iter().map(|&i| &self.edges[i]).collect())
            .unwrap_or_default()
    }

    /// Relation edges whose target is `name`, in load order
    pub fn incoming(&self, name: &str) -> Vec<&RelationEdge> {
        self.by_to
            .get(name)
            .map(|indexes| indexes.iter().map(|&i| &self.edges[i]).collect())
            .unwrap_or_default()
    }

    /// Endpoint types one hop away from `name`
    ///
    /// Target types of outgoing edges followed by source types of incoming
    /// edges. Duplicates and order are preserved; dedup is a rendering-time
    /// concern.
    pub fn next_types(&self, name: &str) -> Vec<EndpointType> {
        let mut types: Vec<EndpointType> =
            self.outgoing(name).iter().map(|e| e.to_type).collect();
        types.extend(self.incoming(name).iter().map(|e| e.from_type));
        types
    }

    /// Relation types touching `name`, outgoing then incoming
    ///
    /// Duplicates and order are preserved, as with [`next_types`].
    ///
    /// [`next_types`]: EntryCatalog::next_types
    pub fn next_relations(&self, name: &str) -> Vec<RelationType> {
        let mut relations: Vec<RelationType> =
            self.outgoing(name).iter().map(|e| e.relation).collect();
        relations.extend(self.incoming(name).iter().map(|e| e.relation));
        relations
    }

    /// All known entry names, unsorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Names of entries under a given super type, sorted
    pub fn names_of_super_type(&self, super_type: EntrySuperType) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, kind)| kind.super_type() == Some(super_type))
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Names of author entries, sorted
    pub fn author_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, kind)| **kind == EntryKind::Author)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}
