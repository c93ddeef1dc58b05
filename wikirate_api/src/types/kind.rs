//! The kinds of cards the client can list.

use std::str::FromStr;

use crate::query::params::{self, ParamSpec};
use crate::Error;

/// A Wikirate card type with a collection endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Company,
    Metric,
    Topic,
    Answer,
    RelationshipAnswer,
    Source,
    Project,
    Dataset,
    Region,
    ResearchGroup,
    CompanyGroup,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 11] = [
        ResourceKind::Company,
        ResourceKind::Metric,
        ResourceKind::Topic,
        ResourceKind::Answer,
        ResourceKind::RelationshipAnswer,
        ResourceKind::Source,
        ResourceKind::Project,
        ResourceKind::Dataset,
        ResourceKind::Region,
        ResourceKind::ResearchGroup,
        ResourceKind::CompanyGroup,
    ];

    /// Name of the collection card, as used in endpoint paths.
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceKind::Company => "Companies",
            ResourceKind::Metric => "Metrics",
            ResourceKind::Topic => "Topics",
            ResourceKind::Answer => "Answers",
            ResourceKind::RelationshipAnswer => "Relationship_Answers",
            ResourceKind::Source => "Sources",
            ResourceKind::Project => "Projects",
            ResourceKind::Dataset => "Data_Sets",
            ResourceKind::Region => "Regions",
            ResourceKind::ResearchGroup => "Research_Groups",
            ResourceKind::CompanyGroup => "Company_Groups",
        }
    }

    /// Recognized pagination and filter arguments of the collection.
    pub fn params(&self) -> &'static ParamSpec {
        match self {
            ResourceKind::Company => &params::COMPANIES,
            ResourceKind::Metric => &params::METRICS,
            ResourceKind::Topic => &params::TOPICS,
            ResourceKind::Answer => &params::ANSWERS,
            ResourceKind::RelationshipAnswer => &params::RELATIONSHIP_ANSWERS,
            ResourceKind::Source => &params::SOURCES,
            ResourceKind::Project => &params::PROJECTS,
            ResourceKind::Dataset => &params::DATASETS,
            ResourceKind::Region => &params::REGIONS,
            ResourceKind::ResearchGroup => &params::RESEARCH_GROUPS,
            ResourceKind::CompanyGroup => &params::COMPANY_GROUPS,
        }
    }

    /// Whether the collection can be searched with the `name` filter.
    pub fn is_searchable_by_name(&self) -> bool {
        !matches!(
            self,
            ResourceKind::Answer | ResourceKind::RelationshipAnswer
        )
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResourceKind::Company => "company",
                ResourceKind::Metric => "metric",
                ResourceKind::Topic => "topic",
                ResourceKind::Answer => "answer",
                ResourceKind::RelationshipAnswer => "relationship_answer",
                ResourceKind::Source => "source",
                ResourceKind::Project => "project",
                ResourceKind::Dataset => "dataset",
                ResourceKind::Region => "region",
                ResourceKind::ResearchGroup => "research_group",
                ResourceKind::CompanyGroup => "company_group",
            }
        )
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.to_string() == wanted)
            .ok_or_else(|| Error::client(format!("Unknown entity kind '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceKind;

    #[test]
    fn parses_display_names() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.to_string().parse::<ResourceKind>().unwrap(), kind);
        }
        assert_eq!(
            " Research_Group ".parse::<ResourceKind>().unwrap(),
            ResourceKind::ResearchGroup
        );
    }

    #[test]
    fn rejects_unknown_kinds() {
        let err = "politician".parse::<ResourceKind>().unwrap_err();
        assert!(err.is_client());
        assert!(err.to_string().contains("politician"));
    }

    #[test]
    fn answers_are_not_searchable_by_name() {
        assert!(!ResourceKind::Answer.is_searchable_by_name());
        assert!(!ResourceKind::RelationshipAnswer.is_searchable_by_name());
        assert!(ResourceKind::Company.is_searchable_by_name());
    }
}
