//! Demonstrates query composition without any external tables
//!
//! This example shows how to:
//! - Classify raw labels into chain tokens
//! - Ask the inference engine for legal continuations
//! - Render the four query shapes

use lingraph_kg::{
    author_query, candidates_after, chain_query, fanout_query, path_query, AuthorTemplate,
    EntryCatalog, EntrySuperType, SchemaRegistry, Token,
};

fn main() -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let catalog = EntryCatalog::new(vec![], vec![]);

    // 1. Build a chain one token at a time, peeking at suggestions
    println!("1. Chain composition...");
    let mut chain: Vec<Token> = Vec::new();
    for raw in ["publication", "truecite", "hypothesis"] {
        chain.push(registry.classify(raw));
        let candidates = candidates_after(chain.last().unwrap(), &catalog);
        println!(
            "   after '{}': types [{}], relations [{}]",
            raw,
            candidates.type_names().join(", "),
            candidates.relation_names().join(", ")
        );
    }
    println!("   query: {}\n", chain_query(&chain));

    // 2. Fan-out search around key entries
    println!("2. Fan-out...");
    println!(
        "   {}\n",
        fanout_query(
            &["polarity sensitivity"],
            EntrySuperType::Hypothesis,
            3
        )
    );

    // 3. Canned author templates
    println!("3. Author templates...");
    for template in AuthorTemplate::ALL {
        println!("   [{}]", template.as_str());
        println!("   {}\n", author_query(template, "12345"));
    }

    // 4. Two-endpoint path search
    println!("4. Path search...");
    println!(
        "   {}",
        path_query(&Token::Any, &registry.classify("topic"), 4)
    );

    Ok(())
}
