//! Query renderers
//!
//! Pure functions turning tokens into Cypher-style query text for the
//! external graph browser. No I/O, no domain errors: every renderer is
//! total over its input domain, and malformed input produces an empty but
//! well-formed fragment instead of failing.

pub mod author;
pub mod chain;
pub mod fanout;
pub mod path;

pub use author::{author_query, AuthorTemplate};
pub use chain::{chain_pattern, chain_query, repair_node_junctures};
pub use fanout::fanout_query;
pub use path::path_query;

use crate::token::Token;

/// Render a token as a node pattern
///
/// Super types and entry types become type-filtered nodes, `ANY` an
/// unfiltered node, and any other literal a property filter on the name.
pub fn node_pattern(token: &Token) -> String {
    match token {
        Token::Any => "()".to_string(),
        Token::Super(t) => format!("(:{})", t.as_str()),
        Token::Type(t) => format!("(:{})", t.as_str()),
        other => format!("({{name: \"{}\"}})", escape_literal(other.as_str())),
    }
}

/// Render a chain token: edges for relation-like tokens, nodes otherwise
pub fn chunk_pattern(token: &Token) -> String {
    match token {
        // Reverse aliases flip the arrow and translate back to the forward
        // relation's label
        Token::Reverse(alias) => format!("<-[:{}]-", alias.forward().as_str()),
        Token::Relation(relation) => format!("-[:{}]->", relation.as_str()),
        Token::AnyEdge => "--".to_string(),
        node_like => node_pattern(node_like),
    }
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
