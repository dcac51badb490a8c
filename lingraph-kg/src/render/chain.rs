//! Free-chain rendering

use crate::token::Token;

use super::chunk_pattern;

/// Render a token chain as a path pattern
///
/// Tokens render independently, join with single spaces, then adjacent
/// node-node junctures collapse into an implicit undirected edge. Adjacent
/// edge tokens are left as the user assembled them.
pub fn chain_pattern(tokens: &[Token]) -> String {
    let rendered: Vec<String> = tokens.iter().map(chunk_pattern).collect();
    repair_node_junctures(&rendered.join(" "))
}

/// Collapse `") ("` junctures into `") -- ("`
///
/// A textual-repair step for chains where the user omitted an explicit
/// relation token between two node-like tokens.
pub fn repair_node_junctures(pattern: &str) -> String {
    pattern.replace(") (", ") -- (")
}

/// Wrap a chain pattern in the full match query
pub fn chain_query(tokens: &[Token]) -> String {
    format!(
        "match p = {} return *, relationships(p)",
        chain_pattern(tokens)
    )
}
