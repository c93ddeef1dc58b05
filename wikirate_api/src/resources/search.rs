use crate::{
    query::Filters,
    types::{Card, ResourceKind},
    Client, Error,
};

impl Client {
    /// Searches cards of the given kind by name.
    ///
    /// `kind` is one of `company`, `metric`, `topic`, `source`, `project`,
    /// `dataset`, `region`, `research_group` or `company_group`. Any other
    /// value fails before a request is sent.
    pub async fn search_by_name(
        &self,
        kind: &str,
        name: &str,
        filters: &Filters,
    ) -> Result<Vec<Card>, Error> {
        let kind: ResourceKind = kind.parse()?;
        let not_searchable = || Error::client(format!("Cannot search {} cards by name", kind));
        if !kind.is_searchable_by_name() {
            return Err(not_searchable());
        }
        let filters = filters.clone().with_name(name);
        match kind {
            ResourceKind::Company => self.get_companies(&filters).await,
            ResourceKind::Metric => self.get_metrics(&filters).await,
            ResourceKind::Topic => self.get_topics(&filters).await,
            ResourceKind::Source => self.get_sources(&filters).await,
            ResourceKind::Project => self.get_projects(&filters).await,
            ResourceKind::Dataset => self.get_datasets(&filters).await,
            ResourceKind::Region => self.get_regions(&filters).await,
            ResourceKind::ResearchGroup => self.get_research_groups(&filters).await,
            ResourceKind::CompanyGroup => self.get_company_groups(&filters).await,
            ResourceKind::Answer | ResourceKind::RelationshipAnswer => Err(not_searchable()),
        }
    }
}
