use std::fmt::Display;

use crate::{
    identifier::{build_endpoint, compound_name},
    query::Filters,
    types::{Card, Content, Items, ResourceKind},
    Client, Error,
};

use super::require_identifier;

impl Client {
    /// Fetches any card by numeric id or name.
    pub async fn get_card(&self, identifier: impl Display) -> Result<Card, Error> {
        let token = require_identifier(identifier)?;
        self.get_json(&format!("{}.json", token), &[]).await
    }

    /// Lists cards of one kind.
    pub async fn get_cards(&self, kind: ResourceKind, filters: &Filters) -> Result<Vec<Card>, Error> {
        let path = build_endpoint(None, kind.type_name());
        self.list(&path, kind, filters).await
    }

    /// Lists cards of one kind that belong to a parent card, e.g. the answers
    /// of a metric or the companies of a company group.
    pub async fn get_scoped_cards(
        &self,
        kind: ResourceKind,
        parent: impl Display,
        filters: &Filters,
    ) -> Result<Vec<Card>, Error> {
        let parent = require_identifier(parent)?;
        let path = build_endpoint(Some(&parent), kind.type_name());
        self.list(&path, kind, filters).await
    }

    async fn list(&self, path: &str, kind: ResourceKind, filters: &Filters) -> Result<Vec<Card>, Error> {
        let params = filters.encode(kind.params());
        let resp: Items<Card> = self.get_json(path, &params).await?;
        Ok(resp.items)
    }

    /// Fetches the rendered content of a card.
    pub async fn get_content(&self, identifier: impl Display) -> Result<String, Error> {
        let token = require_identifier(identifier)?;
        let params = [("view".to_string(), "content".to_string())];
        let resp: Content = self.get_json(&format!("{}.json", token), &params).await?;
        Ok(resp.content)
    }

    pub async fn get_company(&self, identifier: impl Display) -> Result<Card, Error> {
        self.get_card(identifier).await
    }

    /// Lists companies. Filters: `name`, `company_category`, `company_group`,
    /// `country`, `company_identifier`, `bookmark`.
    pub async fn get_companies(&self, filters: &Filters) -> Result<Vec<Card>, Error> {
        self.get_cards(ResourceKind::Company, filters).await
    }

    pub async fn get_topic(&self, identifier: impl Display) -> Result<Card, Error> {
        self.get_card(identifier).await
    }

    pub async fn get_topics(&self, filters: &Filters) -> Result<Vec<Card>, Error> {
        self.get_cards(ResourceKind::Topic, filters).await
    }

    pub async fn get_metric(&self, identifier: impl Display) -> Result<Card, Error> {
        self.get_card(identifier).await
    }

    /// Fetches a metric by its designer and name.
    pub async fn get_metric_by_name(&self, designer: &str, name: &str) -> Result<Card, Error> {
        self.get_card(compound_name(&[&designer, &name])).await
    }

    pub async fn get_metrics(&self, filters: &Filters) -> Result<Vec<Card>, Error> {
        self.get_cards(ResourceKind::Metric, filters).await
    }

    /// Fetches a single answer by numeric id or compound name.
    pub async fn get_answer(&self, identifier: impl Display) -> Result<Card, Error> {
        self.get_card(identifier).await
    }

    /// Lists the answers of the metric `designer+name`.
    pub async fn get_answers(
        &self,
        designer: &str,
        name: &str,
        filters: &Filters,
    ) -> Result<Vec<Card>, Error> {
        let metric = compound_name(&[&designer, &name]);
        self.get_scoped_cards(ResourceKind::Answer, metric, filters)
            .await
    }

    pub async fn get_answers_by_metric_id(
        &self,
        metric_id: u64,
        filters: &Filters,
    ) -> Result<Vec<Card>, Error> {
        self.get_scoped_cards(ResourceKind::Answer, metric_id, filters)
            .await
    }

    /// Lists the answers researched for one company across all metrics.
    pub async fn get_company_answers(
        &self,
        company: impl Display,
        filters: &Filters,
    ) -> Result<Vec<Card>, Error> {
        self.get_scoped_cards(ResourceKind::Answer, company, filters)
            .await
    }

    pub async fn get_relationship_answer(&self, identifier: impl Display) -> Result<Card, Error> {
        self.get_card(identifier).await
    }

    /// Lists the relationship answers of the metric `designer+name`.
    pub async fn get_relationship_answers(
        &self,
        designer: &str,
        name: &str,
        filters: &Filters,
    ) -> Result<Vec<Card>, Error> {
        let metric = compound_name(&[&designer, &name]);
        self.get_scoped_cards(ResourceKind::RelationshipAnswer, metric, filters)
            .await
    }

    pub async fn get_relationship_answers_by_metric_id(
        &self,
        metric_id: u64,
        filters: &Filters,
    ) -> Result<Vec<Card>, Error> {
        self.get_scoped_cards(ResourceKind::RelationshipAnswer, metric_id, filters)
            .await
    }

    pub async fn get_source(&self, identifier: impl Display) -> Result<Card, Error> {
        self.get_card(identifier).await
    }

    pub async fn get_sources(&self, filters: &Filters) -> Result<Vec<Card>, Error> {
        self.get_cards(ResourceKind::Source, filters).await
    }

    pub async fn get_project(&self, identifier: impl Display) -> Result<Card, Error> {
        self.get_card(identifier).await
    }

    pub async fn get_projects(&self, filters: &Filters) -> Result<Vec<Card>, Error> {
        self.get_cards(ResourceKind::Project, filters).await
    }

    pub async fn get_dataset(&self, identifier: impl Display) -> Result<Card, Error> {
        self.get_card(identifier).await
    }

    pub async fn get_datasets(&self, filters: &Filters) -> Result<Vec<Card>, Error> {
        self.get_cards(ResourceKind::Dataset, filters).await
    }

    pub async fn get_region(&self, identifier: impl Display) -> Result<Card, Error> {
        self.get_card(identifier).await
    }

    pub async fn get_regions(&self, filters: &Filters) -> Result<Vec<Card>, Error> {
        self.get_cards(ResourceKind::Region, filters).await
    }

    pub async fn get_research_group(&self, identifier: impl Display) -> Result<Card, Error> {
        self.get_card(identifier).await
    }

    pub async fn get_research_groups(&self, filters: &Filters) -> Result<Vec<Card>, Error> {
        self.get_cards(ResourceKind::ResearchGroup, filters).await
    }

    pub async fn get_company_group(&self, identifier: impl Display) -> Result<Card, Error> {
        self.get_card(identifier).await
    }

    pub async fn get_company_groups(&self, filters: &Filters) -> Result<Vec<Card>, Error> {
        self.get_cards(ResourceKind::CompanyGroup, filters).await
    }
}
