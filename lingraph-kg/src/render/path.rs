//! Two-endpoint path search rendering

use crate::token::Token;

use super::node_pattern;

/// Render the bounded-hop search connecting two endpoint tokens
///
/// Endpoints may be `ANY`, a super type, or a literal entry name; the
/// connector is undirected and variable-length up to `length` hops.
pub fn path_query(from: &Token, to: &Token, length: u32) -> String {
    format!(
        "match p = {}-[*..{}]-{} return *, relationships(p)",
        node_pattern(from),
        length,
        node_pattern(to)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaRegistry;

    #[test]
    fn test_wildcard_endpoints() {
        assert_eq!(
            path_query(&Token::Any, &Token::Any, 1),
            "match p = ()-[*..1]-() return *, relationships(p)"
        );
    }

    #[test]
    fn test_typed_and_literal_endpoints() {
        let registry = SchemaRegistry::new();
        let from = registry.classify("publication");
        let to = registry.classify("Smith, 12345");
        assert_eq!(
            path_query(&from, &to, 4),
            "match p = (:publication)-[*..4]-({name: \"Smith, 12345\"}) \
             return *, relationships(p)"
        );
    }
}
