//! Schema registry: immutable string-boundary lookups
//!
//! The schema itself is compiled in (see [`types`](super::types) and
//! [`relations`](super::relations)); the registry is the handle components
//! receive to resolve raw labels. Constructed once at startup and passed by
//! reference, never ambient global state.

use std::collections::HashMap;

use crate::error::{KgError, Result};
use crate::token::Token;

use super::relations::{RelationType, ReverseRelation};
use super::types::{EndpointType, EntrySuperType, EntryType};

/// Read-only lookup table over the compiled-in schema
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    entry_types: HashMap<&'static str, EntryType>,
    super_types: HashMap<&'static str, EntrySuperType>,
    relations: HashMap<&'static str, RelationType>,
    reverse_relations: HashMap<&'static str, ReverseRelation>,
}

impl SchemaRegistry {
    /// Build the registry from the compiled-in schema tables
    pub fn new() -> Self {
        Self {
            entry_types: EntryType::ALL.iter().map(|t| (t.as_str(), *t)).collect(),
            super_types: EntrySuperType::ALL.iter().map(|t| (t.as_str(), *t)).collect(),
            relations: RelationType::ALL.iter().map(|r| (r.as_str(), *r)).collect(),
            reverse_relations: ReverseRelation::ALL
                .iter()
                .map(|r| (r.as_str(), *r))
                .collect(),
        }
    }

    /// The super type of a registered entry type label
    ///
    /// Fails with [`KgError::UnknownType`] for labels outside the registry;
    /// that indicates corrupted input tables, never a user-triggerable state.
    pub fn super_type_of(&self, entry_type: &str) -> Result<EntrySuperType> {
        self.entry_types
            .get(entry_type)
            .map(|t| t.super_type())
            .ok_or_else(|| KgError::UnknownType(entry_type.to_string()))
    }

    /// Look up a fine-grained entry type by label
    pub fn entry_type(&self, label: &str) -> Option<EntryType> {
        self.entry_types.get(label).copied()
    }

    /// Look up a super type by label
    pub fn super_type(&self, label: &str) -> Option<EntrySuperType> {
        self.super_types.get(label).copied()
    }

    /// Look up a forward relation by label
    pub fn relation(&self, label: &str) -> Option<RelationType> {
        self.relations.get(label).copied()
    }

    /// Look up a reverse alias by label
    pub fn reverse_relation(&self, label: &str) -> Option<ReverseRelation> {
        self.reverse_relations.get(label).copied()
    }

    /// Membership test over the forward relation names
    pub fn is_forward_relation(&self, label: &str) -> bool {
        self.relations.contains_key(label)
    }

    /// Membership test over the reverse alias names
    pub fn is_reverse_relation(&self, label: &str) -> bool {
        self.reverse_relations.contains_key(label)
    }

    /// The reverse alias of a forward relation
    ///
    /// Fails with [`KgError::NotReversible`] when none exists; callers treat
    /// that as "no reverse alias", not as a user-facing failure.
    pub fn reverse_of(&self, relation: RelationType) -> Result<ReverseRelation> {
        relation
            .reverse()
            .ok_or_else(|| KgError::NotReversible(relation.as_str().to_string()))
    }

    /// The forward relation a reverse alias traverses backward
    pub fn forward_of(&self, alias: ReverseRelation) -> RelationType {
        alias.forward()
    }

    /// Endpoint types allowed as the source of a relation
    pub fn from_types(&self, relation: RelationType) -> &'static [EndpointType] {
        relation.from_types()
    }

    /// Endpoint types allowed as the target of a relation
    pub fn to_types(&self, relation: RelationType) -> &'static [EndpointType] {
        relation.to_types()
    }

    /// Classify a raw user label into a [`Token`]
    ///
    /// This is the single classification step at the input boundary. Labels
    /// that are both a super type and an entry type (`hypothesis`,
    /// `framework`) classify as the super type; anything unrecognized is a
    /// literal name.
    pub fn classify(&self, raw: &str) -> Token {
        if raw == "ANY" {
            return Token::Any;
        }
        if raw == "R" {
            return Token::AnyEdge;
        }
        if let Some(relation) = self.relation(raw) {
            return Token::Relation(relation);
        }
        if let Some(alias) = self.reverse_relation(raw) {
            return Token::Reverse(alias);
        }
        if let Some(super_type) = self.super_type(raw) {
            return Token::Super(super_type);
        }
        if let Some(entry_type) = self.entry_type(raw) {
            return Token::Type(entry_type);
        }
        Token::Name(raw.to_string())
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
