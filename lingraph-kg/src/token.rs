//! Query-chain tokens
//!
//! A chain element is classified exactly once, at the boundary where raw
//! user input enters the system (see [`SchemaRegistry::classify`]); all
//! downstream logic pattern-matches the variant instead of re-deriving the
//! category from string membership tests.
//!
//! [`SchemaRegistry::classify`]: crate::schema::SchemaRegistry::classify

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{EntrySuperType, EntryType, RelationType, ReverseRelation};

/// One element of a user-assembled query chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// A literal entry name (or free text not otherwise recognized)
    Name(String),
    /// An entry super type
    Super(EntrySuperType),
    /// A fine-grained entry type
    Type(EntryType),
    /// A forward relation
    Relation(RelationType),
    /// A reverse relation alias
    Reverse(ReverseRelation),
    /// The `ANY` wildcard node
    Any,
    /// The `R` any-relation edge
    AnyEdge,
}

impl Token {
    /// True for tokens that render as an edge pattern
    pub fn is_edge(&self) -> bool {
        matches!(
            self,
            Token::Relation(_) | Token::Reverse(_) | Token::AnyEdge
        )
    }

    /// The raw label this token was classified from
    pub fn as_str(&self) -> &str {
        match self {
            Token::Name(name) => name,
            Token::Super(t) => t.as_str(),
            Token::Type(t) => t.as_str(),
            Token::Relation(r) => r.as_str(),
            Token::Reverse(r) => r.as_str(),
            Token::Any => "ANY",
            Token::AnyEdge => "R",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
