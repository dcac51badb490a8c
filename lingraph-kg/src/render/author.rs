//! Fixed author-pivot query templates
//!
//! Three canned two/three-hop patterns parameterized only by the author's
//! identifier. The disagreement template emits two statements joined by
//! `union` to cover both truth-value orderings.

use serde::{Deserialize, Serialize};

use crate::token::Token;

use super::node_pattern;

/// The canned author search patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorTemplate {
    /// Publications in conflict with the author's work over a hypothesis
    Disagreement,
    /// Publications agreeing with the author's work on a hypothesis
    Agreement,
    /// Publications covering the same keyword as the author's work
    SharedTopic,
}

impl AuthorTemplate {
    pub const ALL: [AuthorTemplate; 3] = [
        AuthorTemplate::Disagreement,
        AuthorTemplate::Agreement,
        AuthorTemplate::SharedTopic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorTemplate::Disagreement => "disagreement",
            AuthorTemplate::Agreement => "agreement",
            AuthorTemplate::SharedTopic => "shared_topic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

/// Render the template for the given author identifier
pub fn author_query(template: AuthorTemplate, author_id: &str) -> String {
    let author = node_pattern(&Token::Name(author_id.to_string()));
    match template {
        AuthorTemplate::Disagreement => format!(
            "match p = {author}-[:author_of]->(:publication)-[:true]->(:hypothesis)\
             <-[:false]-(:publication)  return *, relationships(p)\n\
             union\n\
             match p = {author}-[:author_of]->(:publication)-[:false]->(:hypothesis)\
             <-[:true]-(:publication)  return *, relationships(p)"
        ),
        AuthorTemplate::Agreement => format!(
            "match p = {author}-[:author_of]->(:publication)-[:true]->(:hypothesis)\
             <-[:true]-(:publication)  return *, relationships(p)"
        ),
        AuthorTemplate::SharedTopic => format!(
            "match p = {author}-[:author_of]->(:publication)-[:related_topic]->(:keyword)\
             <-[:related_topic]-(:publication)  return *, relationships(p)"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disagreement_covers_both_orderings() {
        let query = author_query(AuthorTemplate::Disagreement, "12345");
        let statements: Vec<&str> = query.split("\nunion\n").collect();
        assert_eq!(statements.len(), 2);
        assert!(statements[0].contains("-[:true]->(:hypothesis)<-[:false]-"));
        assert!(statements[1].contains("-[:false]->(:hypothesis)<-[:true]-"));
        for statement in statements {
            assert!(statement.starts_with("match p = ({name: \"12345\"})-[:author_of]->"));
            assert!(statement.ends_with("return *, relationships(p)"));
        }
    }

    #[test]
    fn test_agreement_is_a_single_statement() {
        let query = author_query(AuthorTemplate::Agreement, "67890");
        assert_eq!(
            query,
            "match p = ({name: \"67890\"})-[:author_of]->(:publication)-[:true]->\
             (:hypothesis)<-[:true]-(:publication)  return *, relationships(p)"
        );
    }

    #[test]
    fn test_shared_topic_goes_through_a_keyword() {
        let query = author_query(AuthorTemplate::SharedTopic, "67890");
        assert!(query.contains("-[:related_topic]->(:keyword)<-[:related_topic]-"));
        assert!(!query.contains("union"));
    }

    #[test]
    fn test_template_labels_round_trip() {
        for template in AuthorTemplate::ALL {
            assert_eq!(AuthorTemplate::from_str(template.as_str()), Some(template));
        }
        assert_eq!(AuthorTemplate::from_str("agree"), None);
    }
}
