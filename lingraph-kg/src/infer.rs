//! Candidate inference for query-chain continuations
//!
//! Given the last token of a partially built chain, compute the node types
//! and relation names that may legally follow it. Results preserve
//! multiplicity (callers may want frequency-weighted suggestions);
//! presentation layers deduplicate before display. Unrecognized tokens
//! yield empty candidates, never an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::EntryCatalog;
use crate::schema::{EndpointType, EntrySuperType, RelationType, ReverseRelation};
use crate::token::Token;

/// A relation suggested as the next edge token, forward or reversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSuggestion {
    Forward(RelationType),
    Reverse(ReverseRelation),
}

impl EdgeSuggestion {
    /// The label a user would pick to continue the chain
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeSuggestion::Forward(r) => r.as_str(),
            EdgeSuggestion::Reverse(r) => r.as_str(),
        }
    }
}

impl fmt::Display for EdgeSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legal continuations after the last token of a chain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidates {
    /// Node types that may follow, with multiplicity
    pub types: Vec<EndpointType>,
    /// Relations that may follow, with multiplicity
    pub relations: Vec<EdgeSuggestion>,
}

impl Candidates {
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.relations.is_empty()
    }

    /// Deduplicated type labels, first-occurrence order
    pub fn type_names(&self) -> Vec<&'static str> {
        dedup_labels(self.types.iter().map(|t| t.as_str()))
    }

    /// Deduplicated relation labels, first-occurrence order
    pub fn relation_names(&self) -> Vec<&'static str> {
        dedup_labels(self.relations.iter().map(|r| r.as_str()))
    }
}

fn dedup_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for label in labels {
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen
}

/// Compute the candidates that may legally follow `token`
pub fn candidates_after(token: &Token, catalog: &EntryCatalog) -> Candidates {
    match token {
        // After a forward relation the chain lands on one of its targets
        Token::Relation(relation) => Candidates {
            types: relation.to_types().to_vec(),
            relations: Vec::new(),
        },
        // Traversing a reverse-arrow edge lands on what would be the
        // forward relation's source
        Token::Reverse(alias) => Candidates {
            types: alias.forward().from_types().to_vec(),
            relations: Vec::new(),
        },
        Token::Super(super_type) => candidates_after_super_type(*super_type),
        // Known names delegate to the catalog's one-hop neighborhood;
        // unknown names naturally produce empty candidates
        Token::Name(name) => Candidates {
            types: catalog.next_types(name),
            relations: catalog
                .next_relations(name)
                .into_iter()
                .map(EdgeSuggestion::Forward)
                .collect(),
        },
        Token::Type(_) | Token::Any | Token::AnyEdge => Candidates::default(),
    }
}

fn candidates_after_super_type(super_type: EntrySuperType) -> Candidates {
    let endpoint = EndpointType::from(super_type);

    let outgoing: Vec<RelationType> = RelationType::ALL
        .iter()
        .copied()
        .filter(|r| r.from_types().contains(&endpoint))
        .collect();
    let incoming: Vec<RelationType> = RelationType::ALL
        .iter()
        .copied()
        .filter(|r| r.to_types().contains(&endpoint))
        .collect();

    // Incoming relations without a reverse alias contribute no relation
    // candidate, but their source types still count as reachable
    let mut relations: Vec<EdgeSuggestion> = outgoing
        .iter()
        .copied()
        .map(EdgeSuggestion::Forward)
        .collect();
    relations.extend(
        incoming
            .iter()
            .filter_map(|r| r.reverse())
            .map(EdgeSuggestion::Reverse),
    );

    let mut types: Vec<EndpointType> = outgoing
        .iter()
        .flat_map(|r| r.to_types().iter().copied())
        .collect();
    types.extend(incoming.iter().flat_map(|r| r.from_types().iter().copied()));

    Candidates { types, relations }
}
