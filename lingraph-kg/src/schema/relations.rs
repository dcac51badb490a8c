//! Relation types and their endpoint constraints
//!
//! Thirteen forward relation names with compiled-in from/to endpoint tables,
//! four of which carry a reverse alias used for rendering left-pointing
//! edges. The alias set and the forward set are in bijection.

use serde::{Deserialize, Serialize};

use super::types::EndpointType;

/// Forward relation name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    Truecite,
    CanExplain,
    Uncertain,
    Equivalent,
    Incompatible,
    Falsecite,
    SubtopicOf,
    LessAcceptableThan,
    RelatedTopic,
    Other,
    AuthorOf,
    ReferTo,
    Entail,
}

impl RelationType {
    /// All forward relations, in display order
    pub const ALL: [RelationType; 13] = [
        RelationType::Truecite,
        RelationType::CanExplain,
        RelationType::Uncertain,
        RelationType::Equivalent,
        RelationType::Incompatible,
        RelationType::Falsecite,
        RelationType::SubtopicOf,
        RelationType::LessAcceptableThan,
        RelationType::RelatedTopic,
        RelationType::Other,
        RelationType::AuthorOf,
        RelationType::ReferTo,
        RelationType::Entail,
    ];

    /// Convert to the label used in query text and tables
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Truecite => "truecite",
            RelationType::CanExplain => "can_explain",
            RelationType::Uncertain => "uncertain",
            RelationType::Equivalent => "equivalent",
            RelationType::Incompatible => "incompatible",
            RelationType::Falsecite => "falsecite",
            RelationType::SubtopicOf => "subtopic_of",
            RelationType::LessAcceptableThan => "less_acceptable_than",
            RelationType::RelatedTopic => "related_topic",
            RelationType::Other => "other",
            RelationType::AuthorOf => "author_of",
            RelationType::ReferTo => "refer_to",
            RelationType::Entail => "entail",
        }
    }

    /// Parse from a table/query label
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == s)
    }

    /// Endpoint types allowed as the source of this relation
    pub fn from_types(&self) -> &'static [EndpointType] {
        use EndpointType::*;
        match self {
            RelationType::Truecite => &[Publication],
            RelationType::Falsecite => &[Publication],
            RelationType::Uncertain => &[Publication],
            RelationType::CanExplain => &[Hypothesis, Framework],
            RelationType::Incompatible => &[Publication, Hypothesis, Framework, Data],
            RelationType::SubtopicOf => &[Topic],
            RelationType::RelatedTopic => &[Publication, Hypothesis, Framework, Data, Topic],
            RelationType::Other => &[Publication, Hypothesis, Framework, Data, Topic, Experiment],
            RelationType::AuthorOf => &[Author],
            RelationType::ReferTo => &[Publication],
            RelationType::Entail => &[Hypothesis, Framework, Data],
            RelationType::Equivalent => &[Publication, Hypothesis, Framework, Data, Topic],
            RelationType::LessAcceptableThan => &[Data],
        }
    }

    /// Endpoint types allowed as the target of this relation
    pub fn to_types(&self) -> &'static [EndpointType] {
        use EndpointType::*;
        match self {
            RelationType::Truecite => &[Publication, Hypothesis, Framework, Data],
            RelationType::Falsecite => &[Publication, Hypothesis, Framework, Data],
            RelationType::Uncertain => &[Publication, Hypothesis, Framework, Data],
            RelationType::CanExplain => &[Data],
            RelationType::Incompatible => &[Publication, Hypothesis, Framework, Data],
            RelationType::SubtopicOf => &[Topic],
            RelationType::RelatedTopic => &[Topic],
            RelationType::Other => &[Publication, Hypothesis, Framework, Data, Topic, Experiment],
            RelationType::AuthorOf => &[Publication],
            RelationType::ReferTo => &[Publication],
            RelationType::Entail => &[Hypothesis, Framework, Data],
            RelationType::Equivalent => &[Publication, Hypothesis, Framework, Data, Topic],
            RelationType::LessAcceptableThan => &[Data],
        }
    }

    /// The reverse alias for this relation, where one exists
    pub fn reverse(&self) -> Option<ReverseRelation> {
        match self {
            RelationType::Truecite => Some(ReverseRelation::IsTruedBy),
            RelationType::CanExplain => Some(ReverseRelation::CanBeExplainedBy),
            RelationType::Falsecite => Some(ReverseRelation::IsFalsedBy),
            RelationType::Entail => Some(ReverseRelation::IsEntailedBy),
            _ => None,
        }
    }
}

/// Reverse relation alias
///
/// Used only for rendering reversed-arrow query fragments; carries no
/// type-constraint table of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReverseRelation {
    IsTruedBy,
    CanBeExplainedBy,
    IsFalsedBy,
    IsEntailedBy,
}

impl ReverseRelation {
    /// All reverse aliases, in display order
    pub const ALL: [ReverseRelation; 4] = [
        ReverseRelation::IsTruedBy,
        ReverseRelation::CanBeExplainedBy,
        ReverseRelation::IsFalsedBy,
        ReverseRelation::IsEntailedBy,
    ];

    /// Convert to the label used in query text
    pub fn as_str(&self) -> &'static str {
        match self {
            ReverseRelation::IsTruedBy => "is_trued_by",
            ReverseRelation::CanBeExplainedBy => "can_be_explained_by",
            ReverseRelation::IsFalsedBy => "is_falsed_by",
            ReverseRelation::IsEntailedBy => "is_entailed_by",
        }
    }

    /// Parse from a query label
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == s)
    }

    /// The forward relation this alias traverses backward
    pub fn forward(&self) -> RelationType {
        match self {
            ReverseRelation::IsTruedBy => RelationType::Truecite,
            ReverseRelation::CanBeExplainedBy => RelationType::CanExplain,
            ReverseRelation::IsFalsedBy => RelationType::Falsecite,
            ReverseRelation::IsEntailedBy => RelationType::Entail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_labels_round_trip() {
        for relation in RelationType::ALL {
            assert_eq!(RelationType::from_str(relation.as_str()), Some(relation));
        }
        for alias in ReverseRelation::ALL {
            assert_eq!(ReverseRelation::from_str(alias.as_str()), Some(alias));
        }
        assert_eq!(RelationType::from_str("is_trued_by"), None);
        assert_eq!(ReverseRelation::from_str("truecite"), None);
    }

    #[test]
    fn test_reverse_alias_bijection() {
        // Forward -> reverse -> forward is stable for the reversible subset
        let mut reversible = 0;
        for relation in RelationType::ALL {
            if let Some(alias) = relation.reverse() {
                assert_eq!(alias.forward(), relation);
                reversible += 1;
            }
        }
        assert_eq!(reversible, ReverseRelation::ALL.len());

        // Reverse -> forward -> reverse is stable for every alias
        for alias in ReverseRelation::ALL {
            assert_eq!(alias.forward().reverse(), Some(alias));
        }
    }

    #[test]
    fn test_endpoint_tables() {
        use EndpointType::*;
        assert_eq!(
            RelationType::Truecite.to_types(),
            &[Publication, Hypothesis, Framework, Data]
        );
        assert_eq!(RelationType::Truecite.from_types(), &[Publication]);
        assert_eq!(RelationType::AuthorOf.from_types(), &[Author]);
        assert!(RelationType::Other.from_types().contains(&Experiment));
        assert_eq!(RelationType::RelatedTopic.to_types(), &[Topic]);
    }
}
