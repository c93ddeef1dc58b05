use url::Url;
use wikirate_api::identifier::{build_endpoint, card_identifier, compound_name};
use wikirate_api::params;
use wikirate_api::types::ResourceKind;
use wikirate_api::{FilterValue, Filters};

fn base_url() -> Url {
    Url::parse("https://example.com/Answers.json").unwrap()
}

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn empty_filters_leave_the_url_alone() {
    let url = Filters::new().add_to_url(&base_url(), &params::ANSWERS);
    assert_eq!(url.query(), None);
}

#[test]
fn pagination_is_not_bracketed() {
    let url = Filters::new()
        .with_limit(5)
        .with_offset(0)
        .add_to_url(&base_url(), &params::COMPANIES);
    let query = url.query().unwrap();
    assert!(query.contains("limit=5"));
    assert!(query.contains("offset=0"));
    assert!(!query.contains("filter"));
}

#[test]
fn answer_filters() {
    let url = Filters::new()
        .with("value_from", 10)
        .with("value_to", 20)
        .with("company", vec![FilterValue::from(42), FilterValue::from("Acme")])
        .with("company_identifier", vec!["DE0001", "US0002"])
        .with("year", 2024)
        .with("status", "known")
        .add_to_url(&base_url(), &params::ANSWERS);
    let pairs = pairs(&url);
    let expected = [
        ("filter[value][from]", "10"),
        ("filter[value][to]", "20"),
        ("filter[company][]", "~42"),
        ("filter[company][]", "Acme"),
        ("filter[company_identifier[value]]", "DE0001, US0002"),
        ("filter[year]", "2024"),
        ("filter[status]", "known"),
    ];
    assert_eq!(pairs.len(), expected.len());
    for ((key, value), (want_key, want_value)) in pairs.iter().zip(expected) {
        assert_eq!(key, want_key);
        assert_eq!(value, want_value);
    }
}

#[test]
fn relationship_identity_filters_are_arrays() {
    let url = Filters::new()
        .with("subject_company_id", 7)
        .with("object_company_name", "Globex")
        .add_to_url(&base_url(), &params::RELATIONSHIP_ANSWERS);
    assert_eq!(
        pairs(&url),
        vec![
            ("filter[subject_company_id][]".to_string(), "7".to_string()),
            ("filter[object_company_name][]".to_string(), "Globex".to_string()),
        ]
    );
}

#[test]
fn unrecognized_keys_pass_through() {
    let url = Filters::new()
        .with("sort_by", "name")
        .add_to_url(&base_url(), &params::TOPICS);
    assert_eq!(url.query(), Some("sort_by=name"));
}

#[test]
fn filters_depend_on_the_resource() {
    // `country` is a company filter but unknown to topics.
    let filters = Filters::new().with("country", "Germany");
    let companies = filters.add_to_url(&base_url(), ResourceKind::Company.params());
    let topics = filters.add_to_url(&base_url(), ResourceKind::Topic.params());
    assert_eq!(
        pairs(&companies),
        vec![("filter[country]".to_string(), "Germany".to_string())]
    );
    assert_eq!(
        pairs(&topics),
        vec![("country".to_string(), "Germany".to_string())]
    );
}

#[test]
fn endpoint_paths() {
    assert_eq!(build_endpoint(Some(&123), "Companies"), "~123+Companies.json");
    assert_eq!(
        build_endpoint(None, ResourceKind::RelationshipAnswer.type_name()),
        "Relationship_Answers.json"
    );
    let metric = compound_name(&[&"Walk Free", &"MSA Risk Assessment"]);
    assert_eq!(
        build_endpoint(Some(&metric), ResourceKind::Answer.type_name()),
        "Walk_Free+MSA_Risk_Assessment+Answers.json"
    );
    assert_eq!(card_identifier("12345"), "~12345");
    assert_eq!(card_identifier("Acme Corp"), "Acme_Corp");
}

#[test]
fn null_only_lists_send_nothing() {
    let encoded = Filters::new()
        .with("company_identifier", vec![FilterValue::Null])
        .with("value_from", None::<i32>)
        .with("value_to", vec![FilterValue::Null])
        .encode(&params::ANSWERS);
    assert!(encoded.is_empty());
}
