//! Fan-out rendering: bounded-length search around key entries
//!
//! Connects a target super type to each key entity through a
//! variable-length undirected path, one indexed path variable per key, all
//! in a single match. Citation-plumbing edge variants are excluded by a
//! per-path guard.

use crate::schema::EntrySuperType;
use crate::token::Token;

use super::node_pattern;

/// Render the fan-out query for `key_names` around `target` entries
///
/// An empty key list yields a syntactically empty fragment rather than an
/// error; the caller decides whether to surface it.
pub fn fanout_query<S: AsRef<str>>(
    key_names: &[S],
    target: EntrySuperType,
    length: u32,
) -> String {
    let paths: Vec<String> = key_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let key_node = node_pattern(&Token::Name(name.as_ref().to_string()));
            format!(
                "p{i}= (a: {target}) -[*..{length}] - {key_node}\
                 WHERE ALL(r IN relationships(p{i}) \
                 WHERE (r.variant <> \"REFER_TO\") AND (r.variant <> \"BADGED_VERIFIED\"))",
                i = i,
                target = target.as_str(),
                length = length,
                key_node = key_node,
            )
        })
        .collect();
    let relationships: Vec<String> = (0..key_names.len())
        .map(|i| format!("relationships(p{i})"))
        .collect();
    format!(
        "match {} return *, {}",
        paths.join(", "),
        relationships.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_key_fanout() {
        let query = fanout_query(&["X", "Y"], EntrySuperType::Hypothesis, 3);
        assert_eq!(
            query,
            "match p0= (a: hypothesis) -[*..3] - ({name: \"X\"})\
             WHERE ALL(r IN relationships(p0) \
             WHERE (r.variant <> \"REFER_TO\") AND (r.variant <> \"BADGED_VERIFIED\")), \
             p1= (a: hypothesis) -[*..3] - ({name: \"Y\"})\
             WHERE ALL(r IN relationships(p1) \
             WHERE (r.variant <> \"REFER_TO\") AND (r.variant <> \"BADGED_VERIFIED\")) \
             return *, relationships(p0), relationships(p1)"
        );
    }

    #[test]
    fn test_each_key_gets_its_own_path_variable_and_guard() {
        let query = fanout_query(
            &["polarity sensitivity", "NPI licensing", "scope"],
            EntrySuperType::Publication,
            5,
        );
        for i in 0..3 {
            assert!(query.contains(&format!("p{i}= (a: publication) -[*..5] - ")));
            assert!(query.contains(&format!("WHERE ALL(r IN relationships(p{i})")));
        }
        assert!(query.ends_with(
            "return *, relationships(p0), relationships(p1), relationships(p2)"
        ));
        assert_eq!(query.matches("union").count(), 0);
    }

    #[test]
    fn test_empty_key_list_is_total() {
        let query = fanout_query::<&str>(&[], EntrySuperType::Topic, 1);
        assert_eq!(query, "match  return *, ");
    }
}
