//! Entry type definitions for knowledge-graph nodes

use serde::{Deserialize, Serialize};

/// Coarse entity category every entry type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySuperType {
    Publication,
    Hypothesis,
    Framework,
    Data,
    Topic,
}

impl EntrySuperType {
    /// All super types, in display order
    pub const ALL: [EntrySuperType; 5] = [
        EntrySuperType::Publication,
        EntrySuperType::Hypothesis,
        EntrySuperType::Framework,
        EntrySuperType::Data,
        EntrySuperType::Topic,
    ];

    /// Convert to the label used in query text and tables
    pub fn as_str(&self) -> &'static str {
        match self {
            EntrySuperType::Publication => "publication",
            EntrySuperType::Hypothesis => "hypothesis",
            EntrySuperType::Framework => "framework",
            EntrySuperType::Data => "data",
            EntrySuperType::Topic => "topic",
        }
    }

    /// Parse from a table/query label
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "publication" => Some(EntrySuperType::Publication),
            "hypothesis" => Some(EntrySuperType::Hypothesis),
            "framework" => Some(EntrySuperType::Framework),
            "data" => Some(EntrySuperType::Data),
            "topic" => Some(EntrySuperType::Topic),
            _ => None,
        }
    }
}

/// Fine-grained entry type
///
/// Four families: publication kinds, hypothesis, framework, data kinds and
/// topic kinds. Every entry type belongs to exactly one [`EntrySuperType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    // Publication kinds
    Article,
    #[serde(rename = "proceedings-article")]
    ProceedingsArticle,
    Bathesis,
    Book,
    Incollection,
    Inproceedings,
    #[serde(rename = "journal-article")]
    JournalArticle,
    Mathesis,
    Misc,
    Ms,
    Phdthesis,
    Unpublished,
    // Hypothesis / framework
    Hypothesis,
    Framework,
    // Data kinds
    Acceptability,
    Generalization,
    Report,
    Other,
    // Topic kinds
    Keyword,
    Language,
    Vocabulary,
    ResearchQuestion,
}

impl EntryType {
    /// All entry types, grouped by family
    pub const ALL: [EntryType; 22] = [
        EntryType::Article,
        EntryType::ProceedingsArticle,
        EntryType::Bathesis,
        EntryType::Book,
        EntryType::Incollection,
        EntryType::Inproceedings,
        EntryType::JournalArticle,
        EntryType::Mathesis,
        EntryType::Misc,
        EntryType::Ms,
        EntryType::Phdthesis,
        EntryType::Unpublished,
        EntryType::Hypothesis,
        EntryType::Framework,
        EntryType::Acceptability,
        EntryType::Generalization,
        EntryType::Report,
        EntryType::Other,
        EntryType::Keyword,
        EntryType::Language,
        EntryType::Vocabulary,
        EntryType::ResearchQuestion,
    ];

    /// Convert to the label used in query text and tables
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Article => "article",
            EntryType::ProceedingsArticle => "proceedings-article",
            EntryType::Bathesis => "bathesis",
            EntryType::Book => "book",
            EntryType::Incollection => "incollection",
            EntryType::Inproceedings => "inproceedings",
            EntryType::JournalArticle => "journal-article",
            EntryType::Mathesis => "mathesis",
            EntryType::Misc => "misc",
            EntryType::Ms => "ms",
            EntryType::Phdthesis => "phdthesis",
            EntryType::Unpublished => "unpublished",
            EntryType::Hypothesis => "hypothesis",
            EntryType::Framework => "framework",
            EntryType::Acceptability => "acceptability",
            EntryType::Generalization => "generalization",
            EntryType::Report => "report",
            EntryType::Other => "other",
            EntryType::Keyword => "keyword",
            EntryType::Language => "language",
            EntryType::Vocabulary => "vocabulary",
            EntryType::ResearchQuestion => "research_question",
        }
    }

    /// Parse from a table/query label
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    /// The super type this entry type belongs to
    pub fn super_type(&self) -> EntrySuperType {
        match self {
            EntryType::Article
            | EntryType::ProceedingsArticle
            | EntryType::Bathesis
            | EntryType::Book
            | EntryType::Incollection
            | EntryType::Inproceedings
            | EntryType::JournalArticle
            | EntryType::Mathesis
            | EntryType::Misc
            | EntryType::Ms
            | EntryType::Phdthesis
            | EntryType::Unpublished => EntrySuperType::Publication,
            EntryType::Hypothesis => EntrySuperType::Hypothesis,
            EntryType::Framework => EntrySuperType::Framework,
            EntryType::Acceptability
            | EntryType::Generalization
            | EntryType::Report
            | EntryType::Other => EntrySuperType::Data,
            EntryType::Keyword
            | EntryType::Language
            | EntryType::Vocabulary
            | EntryType::ResearchQuestion => EntrySuperType::Topic,
        }
    }
}

/// Endpoint category a relation may attach to
///
/// The five entry super types plus the synthetic `author` and `experiment`
/// endpoints that only occur in relation type tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointType {
    Publication,
    Hypothesis,
    Framework,
    Data,
    Topic,
    Author,
    Experiment,
}

impl EndpointType {
    /// Convert to the label used in query text and tables
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointType::Publication => "publication",
            EndpointType::Hypothesis => "hypothesis",
            EndpointType::Framework => "framework",
            EndpointType::Data => "data",
            EndpointType::Topic => "topic",
            EndpointType::Author => "author",
            EndpointType::Experiment => "experiment",
        }
    }

    /// Parse from a table/query label
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "publication" => Some(EndpointType::Publication),
            "hypothesis" => Some(EndpointType::Hypothesis),
            "framework" => Some(EndpointType::Framework),
            "data" => Some(EndpointType::Data),
            "topic" => Some(EndpointType::Topic),
            "author" => Some(EndpointType::Author),
            "experiment" => Some(EndpointType::Experiment),
            _ => None,
        }
    }

    /// The corresponding super type, if this endpoint is one
    pub fn as_super_type(&self) -> Option<EntrySuperType> {
        EntrySuperType::from_str(self.as_str())
    }
}

impl From<EntrySuperType> for EndpointType {
    fn from(value: EntrySuperType) -> Self {
        match value {
            EntrySuperType::Publication => EndpointType::Publication,
            EntrySuperType::Hypothesis => EndpointType::Hypothesis,
            EntrySuperType::Framework => EndpointType::Framework,
            EntrySuperType::Data => EndpointType::Data,
            EntrySuperType::Topic => EndpointType::Topic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_labels_round_trip() {
        for entry_type in EntryType::ALL {
            assert_eq!(EntryType::from_str(entry_type.as_str()), Some(entry_type));
        }
        assert_eq!(EntryType::from_str("gadget"), None);
    }

    #[test]
    fn test_publication_family() {
        let publications = EntryType::ALL
            .iter()
            .filter(|t| t.super_type() == EntrySuperType::Publication)
            .count();
        assert_eq!(publications, 12);
        assert_eq!(
            EntryType::JournalArticle.super_type(),
            EntrySuperType::Publication
        );
        assert_eq!(EntryType::JournalArticle.as_str(), "journal-article");
    }

    #[test]
    fn test_topic_and_data_families() {
        assert_eq!(EntryType::Keyword.super_type(), EntrySuperType::Topic);
        assert_eq!(
            EntryType::ResearchQuestion.super_type(),
            EntrySuperType::Topic
        );
        assert_eq!(EntryType::Acceptability.super_type(), EntrySuperType::Data);
        assert_eq!(EntryType::Other.super_type(), EntrySuperType::Data);
        assert_eq!(EntryType::Hypothesis.super_type(), EntrySuperType::Hypothesis);
        assert_eq!(EntryType::Framework.super_type(), EntrySuperType::Framework);
    }

    #[test]
    fn test_endpoint_type_covers_super_types() {
        for super_type in EntrySuperType::ALL {
            let endpoint = EndpointType::from(super_type);
            assert_eq!(endpoint.as_str(), super_type.as_str());
            assert_eq!(endpoint.as_super_type(), Some(super_type));
        }
        assert_eq!(EndpointType::Author.as_super_type(), None);
        assert_eq!(EndpointType::Experiment.as_super_type(), None);
    }
}
