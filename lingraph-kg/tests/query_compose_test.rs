//! End-to-end composition: classify raw labels, infer continuations,
//! render queries, retain them in per-mode history.

use lingraph_kg::{
    author_query, candidates_after, chain_query, fanout_query, path_query, AuthorTemplate,
    EndpointType, EntryCatalog, EntryKind, EntryType, EntrySuperType, HistorySet, QueryMode,
    RelationEdge, RelationType, SchemaRegistry, Token,
};

fn sample_catalog() -> EntryCatalog {
    EntryCatalog::new(
        vec![
            (
                "Kubota 2015".to_string(),
                EntryKind::Entry(EntryType::JournalArticle),
            ),
            (
                "NPI licensing".to_string(),
                EntryKind::Entry(EntryType::Hypothesis),
            ),
        ],
        vec![RelationEdge {
            from: "Kubota 2015".to_string(),
            to: "NPI licensing".to_string(),
            relation: RelationType::Truecite,
            from_type: EndpointType::Publication,
            to_type: EndpointType::Hypothesis,
        }],
    )
}

/// Test: after "truecite" the engine offers its target types and no
/// relations
#[test]
fn test_candidates_after_forward_relation() {
    let registry = SchemaRegistry::new();
    let catalog = sample_catalog();

    let candidates = candidates_after(&registry.classify("truecite"), &catalog);
    assert_eq!(
        candidates.type_names(),
        vec!["publication", "hypothesis", "framework", "data"]
    );
    assert!(candidates.relations.is_empty());
}

/// Test: after "is_trued_by" the engine offers the forward relation's
/// source types
#[test]
fn test_candidates_after_reverse_alias() {
    let registry = SchemaRegistry::new();
    let catalog = sample_catalog();

    let candidates = candidates_after(&registry.classify("is_trued_by"), &catalog);
    assert_eq!(candidates.type_names(), vec!["publication"]);
    assert!(candidates.relations.is_empty());
}

/// Test: a user assembling a chain step by step gets suggestions at each
/// point and a valid query at the end
#[test]
fn test_interactive_chain_session() {
    let registry = SchemaRegistry::new();
    let catalog = sample_catalog();
    let mut chain: Vec<Token> = Vec::new();
    let mut histories = HistorySet::new();

    chain.push(registry.classify("Kubota 2015"));
    let candidates = candidates_after(chain.last().unwrap(), &catalog);
    assert_eq!(candidates.type_names(), vec!["hypothesis"]);
    assert_eq!(candidates.relation_names(), vec!["truecite"]);

    chain.push(registry.classify("truecite"));
    let candidates = candidates_after(chain.last().unwrap(), &catalog);
    assert!(candidates.type_names().contains(&"hypothesis"));

    chain.push(registry.classify("hypothesis"));
    let query = chain_query(&chain);
    assert_eq!(
        query,
        "match p = ({name: \"Kubota 2015\"}) -[:truecite]-> (:hypothesis) \
         return *, relationships(p)"
    );

    histories.prepend(QueryMode::Chain, query.clone());
    assert_eq!(histories.joined_with_union(QueryMode::Chain), query);
}

/// Test: composing repeatedly unions newest-first across all four modes
#[test]
fn test_mode_histories_accumulate_independently() {
    let registry = SchemaRegistry::new();
    let mut histories = HistorySet::new();

    let chain = chain_query(&[registry.classify("ANY")]);
    let fanout = fanout_query(&["NPI licensing"], EntrySuperType::Hypothesis, 3);
    let author = author_query(AuthorTemplate::Agreement, "12345");
    let path = path_query(&Token::Any, &registry.classify("topic"), 2);

    histories.prepend(QueryMode::Chain, chain.clone());
    histories.prepend(QueryMode::FanOut, fanout.clone());
    histories.prepend(QueryMode::Author, author.clone());
    histories.prepend(QueryMode::Path, path.clone());
    histories.prepend(QueryMode::Path, chain.clone());

    assert_eq!(histories.joined_with_union(QueryMode::Chain), chain);
    assert_eq!(histories.joined_with_union(QueryMode::FanOut), fanout);
    assert_eq!(histories.joined_with_union(QueryMode::Author), author);
    assert_eq!(
        histories.joined_with_union(QueryMode::Path),
        format!("{chain}\nunion\n{path}")
    );
}

/// Test: the fan-out query carries one guarded path clause per key name
#[test]
fn test_fanout_shape() {
    let query = fanout_query(&["X", "Y"], EntrySuperType::Hypothesis, 3);
    assert!(query.starts_with("match p0= (a: hypothesis) -[*..3] - ({name: \"X\"})"));
    assert!(query.contains("p1= (a: hypothesis) -[*..3] - ({name: \"Y\"})"));
    assert_eq!(query.matches("WHERE ALL").count(), 2);
    assert!(query.ends_with("return *, relationships(p0), relationships(p1)"));
}

/// Test: the path search renders wildcard endpoints as bare nodes
#[test]
fn test_path_search_shape() {
    assert_eq!(
        path_query(&Token::Any, &Token::Any, 1),
        "match p = ()-[*..1]-() return *, relationships(p)"
    );
}
