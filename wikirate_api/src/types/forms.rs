//! Field sets submitted when creating or updating cards.
//!
//! Each form knows which of its fields the server requires, so mutations can
//! be rejected locally before a request is sent.

use std::fmt::Display;

use crate::identifier::compound_name;
use crate::types::Attachment;
use crate::Error;

/// Form field under which source files are uploaded.
pub const SOURCE_FILE_FIELD: &str = "card[subcards][+file][file]";

/// `card[...]` form parameters of a create or update request.
#[derive(Default)]
pub(crate) struct CardForm {
    pairs: Vec<(String, String)>,
}

impl CardForm {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn card_type(mut self, card_type: &str) -> Self {
        self.pairs
            .push(("card[type]".to_string(), card_type.to_string()));
        self
    }

    pub(crate) fn name(mut self, name: &str) -> Self {
        self.pairs.push(("card[name]".to_string(), name.to_string()));
        self
    }

    pub(crate) fn subcard(mut self, field: &str, value: Option<impl Display>) -> Self {
        if let Some(value) = value {
            self.pairs.push((
                format!("card[subcards][+{}]", field),
                value.to_string(),
            ));
        }
        self
    }

    /// True once the form carries a subcard or a new card name.
    fn has_changes(&self) -> bool {
        self.pairs
            .iter()
            .any(|(key, _)| key.starts_with("card[subcards]") || key == "card[name]")
    }

    /// Finishes the form, asking the server to answer with the card as JSON.
    pub(crate) fn into_params(mut self) -> Vec<(String, String)> {
        self.pairs.push(("format".to_string(), "json".to_string()));
        self.pairs
            .push(("success[format]".to_string(), "json".to_string()));
        self.pairs
    }
}

fn check_required(fields: &[(&'static str, bool)]) -> Result<(), Error> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::missing_fields(&missing))
    }
}

fn nothing_to_update(form: &CardForm) -> Result<(), Error> {
    if form.has_changes() {
        Ok(())
    } else {
        Err(Error::client("Nothing to update: no fields were set"))
    }
}

/// Fields of a company card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompanyForm {
    pub name: Option<String>,
    pub headquarters: Option<String>,
    pub website: Option<String>,
    pub wikipedia: Option<String>,
    pub open_corporates: Option<String>,
    pub sec_cik: Option<String>,
    pub lei: Option<String>,
    pub os_id: Option<String>,
    pub isin: Vec<String>,
}

impl CompanyForm {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
    pub fn with_headquarters(mut self, headquarters: &str) -> Self {
        self.headquarters = Some(headquarters.to_string());
        self
    }
    pub fn with_website(mut self, website: &str) -> Self {
        self.website = Some(website.to_string());
        self
    }
    pub fn with_wikipedia(mut self, wikipedia: &str) -> Self {
        self.wikipedia = Some(wikipedia.to_string());
        self
    }
    pub fn with_open_corporates(mut self, open_corporates: &str) -> Self {
        self.open_corporates = Some(open_corporates.to_string());
        self
    }
    pub fn with_sec_cik(mut self, sec_cik: &str) -> Self {
        self.sec_cik = Some(sec_cik.to_string());
        self
    }
    pub fn with_lei(mut self, lei: &str) -> Self {
        self.lei = Some(lei.to_string());
        self
    }
    pub fn with_os_id(mut self, os_id: &str) -> Self {
        self.os_id = Some(os_id.to_string());
        self
    }
    pub fn with_isin(mut self, isin: &str) -> Self {
        self.isin.push(isin.to_string());
        self
    }

    /// Required fields that are still unset when creating a company.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.headquarters.is_none() {
            missing.push("headquarters");
        }
        missing
    }

    fn subcards(&self, form: CardForm) -> CardForm {
        let isin = (!self.isin.is_empty()).then(|| self.isin.join("\n"));
        form.subcard("headquarters", self.headquarters.as_ref())
            .subcard("website", self.website.as_ref())
            .subcard("wikipedia", self.wikipedia.as_ref())
            .subcard("open_corporates", self.open_corporates.as_ref())
            .subcard("sec_cik", self.sec_cik.as_ref())
            .subcard("lei", self.lei.as_ref())
            .subcard("os_id", self.os_id.as_ref())
            .subcard("isin", isin)
    }

    pub(crate) fn create_params(&self) -> Result<Vec<(String, String)>, Error> {
        check_required(&[
            ("name", self.name.is_some()),
            ("headquarters", self.headquarters.is_some()),
        ])?;
        let mut form = CardForm::new().card_type("Company");
        if let Some(name) = &self.name {
            form = form.name(name);
        }
        Ok(self.subcards(form).into_params())
    }

    pub(crate) fn update_params(&self) -> Result<Vec<(String, String)>, Error> {
        let mut form = self.subcards(CardForm::new());
        if let Some(name) = &self.name {
            form = form.name(name);
        }
        nothing_to_update(&form)?;
        Ok(form.into_params())
    }
}

/// Fields of a metric answer: the value a company reported for a metric in a
/// given year.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnswerForm {
    pub metric_designer: Option<String>,
    pub metric_name: Option<String>,
    pub company: Option<String>,
    pub year: Option<i32>,
    pub value: Option<String>,
    pub source: Option<String>,
    pub comment: Option<String>,
    pub unpublished: Option<bool>,
}

impl AnswerForm {
    pub fn with_metric(mut self, designer: &str, name: &str) -> Self {
        self.metric_designer = Some(designer.to_string());
        self.metric_name = Some(name.to_string());
        self
    }
    pub fn with_company(mut self, company: impl Display) -> Self {
        self.company = Some(company.to_string());
        self
    }
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
    pub fn with_value(mut self, value: impl Display) -> Self {
        self.value = Some(value.to_string());
        self
    }
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
    pub fn with_unpublished(mut self, unpublished: bool) -> Self {
        self.unpublished = Some(unpublished);
        self
    }

    fn name_fields(&self) -> [(&'static str, bool); 4] {
        [
            ("metric_designer", self.metric_designer.is_some()),
            ("metric_name", self.metric_name.is_some()),
            ("company", self.company.is_some()),
            ("year", self.year.is_some()),
        ]
    }

    /// `designer+metric+company+year`, once all four parts are known.
    pub fn card_name(&self) -> Option<String> {
        match (&self.metric_designer, &self.metric_name, &self.company, self.year) {
            (Some(designer), Some(metric), Some(company), Some(year)) => {
                Some(compound_name(&[designer, metric, company, &year]))
            }
            _ => None,
        }
    }

    fn subcards(&self, form: CardForm) -> CardForm {
        form.subcard("value", self.value.as_ref())
            .subcard("source", self.source.as_ref())
            .subcard("discussion", self.comment.as_ref())
            .subcard("unpublished", self.unpublished)
    }

    pub(crate) fn create_params(&self) -> Result<Vec<(String, String)>, Error> {
        let mut required = self.name_fields().to_vec();
        required.push(("value", self.value.is_some()));
        required.push(("source", self.source.is_some()));
        check_required(&required)?;
        let name = self.card_name().unwrap_or_default();
        let form = CardForm::new().card_type("Answer").name(&name);
        Ok(self.subcards(form).into_params())
    }

    pub(crate) fn update_params(&self) -> Result<Vec<(String, String)>, Error> {
        check_required(&self.name_fields())?;
        let form = self.subcards(CardForm::new());
        nothing_to_update(&form)?;
        let name = self.card_name().unwrap_or_default();
        Ok(form.name(&name).into_params())
    }
}

/// Fields of a relationship answer: a value relating a subject company to an
/// object company for a metric in a given year.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationshipAnswerForm {
    pub metric_designer: Option<String>,
    pub metric_name: Option<String>,
    pub subject_company: Option<String>,
    pub object_company: Option<String>,
    pub year: Option<i32>,
    pub value: Option<String>,
    pub source: Option<String>,
    pub comment: Option<String>,
}

impl RelationshipAnswerForm {
    pub fn with_metric(mut self, designer: &str, name: &str) -> Self {
        self.metric_designer = Some(designer.to_string());
        self.metric_name = Some(name.to_string());
        self
    }
    pub fn with_subject_company(mut self, company: impl Display) -> Self {
        self.subject_company = Some(company.to_string());
        self
    }
    pub fn with_object_company(mut self, company: impl Display) -> Self {
        self.object_company = Some(company.to_string());
        self
    }
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
    pub fn with_value(mut self, value: impl Display) -> Self {
        self.value = Some(value.to_string());
        self
    }
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    fn name_fields(&self) -> [(&'static str, bool); 5] {
        [
            ("metric_designer", self.metric_designer.is_some()),
            ("metric_name", self.metric_name.is_some()),
            ("subject_company", self.subject_company.is_some()),
            ("year", self.year.is_some()),
            ("object_company", self.object_company.is_some()),
        ]
    }

    /// `designer+metric+subject+year+object`, once all five parts are known.
    pub fn card_name(&self) -> Option<String> {
        match (
            &self.metric_designer,
            &self.metric_name,
            &self.subject_company,
            self.year,
            &self.object_company,
        ) {
            (Some(designer), Some(metric), Some(subject), Some(year), Some(object)) => Some(
                compound_name(&[designer, metric, subject, &year, object]),
            ),
            _ => None,
        }
    }

    fn subcards(&self, form: CardForm) -> CardForm {
        form.subcard("value", self.value.as_ref())
            .subcard("source", self.source.as_ref())
            .subcard("discussion", self.comment.as_ref())
    }

    pub(crate) fn create_params(&self) -> Result<Vec<(String, String)>, Error> {
        let mut required = self.name_fields().to_vec();
        required.push(("value", self.value.is_some()));
        required.push(("source", self.source.is_some()));
        check_required(&required)?;
        let name = self.card_name().unwrap_or_default();
        let form = CardForm::new()
            .card_type("Relationship Answer")
            .name(&name);
        Ok(self.subcards(form).into_params())
    }

    pub(crate) fn update_params(&self) -> Result<Vec<(String, String)>, Error> {
        check_required(&self.name_fields())?;
        let form = self.subcards(CardForm::new());
        nothing_to_update(&form)?;
        let name = self.card_name().unwrap_or_default();
        Ok(form.name(&name).into_params())
    }
}

/// Fields of a source card: a report or web page that answers cite.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceForm {
    pub title: Option<String>,
    pub link: Option<String>,
    pub company: Option<String>,
    pub report_type: Option<String>,
    pub year: Option<i32>,
    pub file: Option<Attachment>,
}

impl SourceForm {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }
    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }
    pub fn with_company(mut self, company: impl Display) -> Self {
        self.company = Some(company.to_string());
        self
    }
    pub fn with_report_type(mut self, report_type: &str) -> Self {
        self.report_type = Some(report_type.to_string());
        self
    }
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
    /// Attaches a local file, uploaded as the source's document.
    pub fn with_file(mut self, path: impl AsRef<std::path::Path>) -> Self {
        self.file = Some(Attachment::new(SOURCE_FILE_FIELD, path));
        self
    }

    fn subcards(&self, form: CardForm) -> CardForm {
        form.subcard("title", self.title.as_ref())
            .subcard("link", self.link.as_ref())
            .subcard("company", self.company.as_ref())
            .subcard("report_type", self.report_type.as_ref())
            .subcard("year", self.year)
    }

    /// Files to send alongside the form.
    pub(crate) fn attachments(&self) -> Vec<Attachment> {
        self.file.iter().cloned().collect()
    }

    pub(crate) fn create_params(&self) -> Result<Vec<(String, String)>, Error> {
        check_required(&[("title", self.title.is_some())])?;
        if self.link.is_none() && self.file.is_none() {
            return Err(Error::client("A source needs either a link or a file"));
        }
        let form = CardForm::new().card_type("Source");
        Ok(self.subcards(form).into_params())
    }

    pub(crate) fn update_params(&self) -> Result<Vec<(String, String)>, Error> {
        let form = self.subcards(CardForm::new());
        if self.file.is_none() {
            nothing_to_update(&form)?;
        }
        Ok(form.into_params())
    }
}
