use std::fmt::Display;
use std::path::Path;

use crate::{
    types::{AnswerForm, Card, CompanyForm, RelationshipAnswerForm, SourceForm},
    Client, Error,
};

use super::require_identifier;

const CREATE_PATH: &str = "card/create";
const UPDATE_PATH: &str = "card/update";

fn update_path(token: &str) -> String {
    format!("update/{}", token)
}

impl Client {
    /// Creates a company. `name` and `headquarters` are required.
    pub async fn add_company(&self, form: &CompanyForm) -> Result<Card, Error> {
        let params = form.create_params()?;
        self.post_json(CREATE_PATH, &params, &[]).await
    }

    pub async fn update_company(
        &self,
        identifier: impl Display,
        form: &CompanyForm,
    ) -> Result<Card, Error> {
        let token = require_identifier(identifier)?;
        let params = form.update_params()?;
        self.post_json(&update_path(&token), &params, &[]).await
    }

    /// Creates an answer. The metric, company, year, value and source are
    /// all required.
    pub async fn add_answer(&self, form: &AnswerForm) -> Result<Card, Error> {
        let params = form.create_params()?;
        self.post_json(CREATE_PATH, &params, &[]).await
    }

    /// Updates the answer addressed by the form's metric, company and year.
    pub async fn update_answer(&self, form: &AnswerForm) -> Result<Card, Error> {
        let params = form.update_params()?;
        self.post_json(UPDATE_PATH, &params, &[]).await
    }

    pub async fn add_relationship_answer(
        &self,
        form: &RelationshipAnswerForm,
    ) -> Result<Card, Error> {
        let params = form.create_params()?;
        self.post_json(CREATE_PATH, &params, &[]).await
    }

    /// Updates the relationship answer addressed by the form's metric,
    /// companies and year.
    pub async fn update_relationship_answer(
        &self,
        form: &RelationshipAnswerForm,
    ) -> Result<Card, Error> {
        let params = form.update_params()?;
        self.post_json(UPDATE_PATH, &params, &[]).await
    }

    /// Creates a source from a link or an uploaded file.
    pub async fn add_source(&self, form: &SourceForm) -> Result<Card, Error> {
        let params = form.create_params()?;
        self.post_json(CREATE_PATH, &params, &form.attachments())
            .await
    }

    pub async fn update_source(
        &self,
        identifier: impl Display,
        form: &SourceForm,
    ) -> Result<Card, Error> {
        let token = require_identifier(identifier)?;
        let params = form.update_params()?;
        self.post_json(&update_path(&token), &params, &form.attachments())
            .await
    }

    /// Replaces the document of an existing source with a local file.
    pub async fn upload_source_file(
        &self,
        identifier: impl Display,
        path: impl AsRef<Path>,
    ) -> Result<Card, Error> {
        self.update_source(identifier, &SourceForm::default().with_file(path))
            .await
    }

    /// Deletes a card by numeric id.
    pub async fn delete_card(&self, id: u64) -> Result<(), Error> {
        self.delete(&format!("~{}", id)).await
    }
}
