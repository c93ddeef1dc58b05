//! Filter arguments and their encoding into Wikirate's bracketed query keys.

use std::fmt;

use url::Url;

use super::params::ParamSpec;

/// Bracketed range keys, keyed by the flat filter name.
const RANGE_KEYS: &[(&str, &str)] = &[
    ("value_from", "filter[value][from]"),
    ("value_to", "filter[value][to]"),
];

/// Company identity filters of relationship answers. Always sent as arrays.
const IDENTITY_KEYS: &[&str] = &[
    "subject_company_name",
    "object_company_name",
    "object_company_id",
    "subject_company_id",
];

/// A single filter argument.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    /// Absent value. Dropped during encoding.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<FilterValue>),
}

impl FilterValue {
    fn is_null(&self) -> bool {
        matches!(self, FilterValue::Null)
    }

    /// Non-null members of a list, or the value itself for scalars.
    fn members(&self) -> Vec<&FilterValue> {
        match self {
            FilterValue::List(values) => values.iter().filter(|v| !v.is_null()).collect(),
            FilterValue::Null => Vec::new(),
            scalar => vec![scalar],
        }
    }

    /// Integers as numeric-id tokens, everything else as-is.
    fn as_id_token(&self) -> String {
        match self {
            FilterValue::Int(n) => format!("~{}", n),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Null => Ok(()),
            FilterValue::Bool(b) => write!(f, "{}", b),
            FilterValue::Int(n) => write!(f, "{}", n),
            FilterValue::Float(x) => write!(f, "{}", x),
            FilterValue::Text(s) => f.write_str(s),
            FilterValue::List(values) => {
                let joined = values
                    .iter()
                    .filter(|v| !v.is_null())
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                f.write_str(&joined)
            }
        }
    }
}

macro_rules! int_filter_value {
    ($($t:ty),*) => {
        $(impl From<$t> for FilterValue {
            fn from(value: $t) -> Self {
                FilterValue::Int(i64::from(value))
            }
        })*
    };
}
int_filter_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for FilterValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => FilterValue::Int(n),
            Err(_) => FilterValue::Text(value.to_string()),
        }
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        FilterValue::Text(value.clone())
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FilterValue::Null)
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        FilterValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FilterValue> + Clone> From<&[T]> for FilterValue {
    fn from(values: &[T]) -> Self {
        FilterValue::List(values.iter().cloned().map(Into::into).collect())
    }
}

/// Flat filter and pagination arguments for a collection request.
///
/// Keys keep their insertion order; setting a key again replaces its value.
/// Which keys count as pagination and which as filters is decided per
/// resource by a [`ParamSpec`] when the arguments are encoded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    entries: Vec<(String, FilterValue)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an arbitrary argument.
    pub fn with(mut self, key: &str, value: impl Into<FilterValue>) -> Self {
        self.set(key, value.into());
        self
    }

    /// Maximum number of items to return.
    pub fn with_limit(self, limit: u32) -> Self {
        self.with("limit", limit)
    }

    /// Number of items to skip.
    pub fn with_offset(self, offset: u32) -> Self {
        self.with("offset", offset)
    }

    /// Filters by (partial) card name.
    pub fn with_name(self, name: &str) -> Self {
        self.with("name", name)
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn set(&mut self, key: &str, value: FilterValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Encodes the arguments into query/form pairs for the given resource.
    ///
    /// Pagination keys pass through untouched. Filter keys are rewritten into
    /// the `filter[...]` grammar. Unknown keys pass through with a warning.
    pub fn encode(&self, spec: &ParamSpec) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.entries {
            // Nulls, empty lists and lists of nulls carry nothing to send.
            if value.members().is_empty() {
                continue;
            }
            if spec.is_endpoint_param(key) {
                push_plain(&mut pairs, key, value);
            } else if spec.is_filter(key) {
                encode_filter(&mut pairs, key, value);
            } else {
                tracing::warn!("Passing through unrecognized parameter '{}'", key);
                push_plain(&mut pairs, key, value);
            }
        }
        pairs
    }

    /// Appends the encoded arguments to the URL's query string.
    pub fn add_to_url(&self, url: &Url, spec: &ParamSpec) -> Url {
        let mut url = url.clone();
        let pairs = self.encode(spec);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}

fn push_plain(pairs: &mut Vec<(String, String)>, key: &str, value: &FilterValue) {
    for member in value.members() {
        pairs.push((key.to_string(), member.to_string()));
    }
}

fn encode_filter(pairs: &mut Vec<(String, String)>, key: &str, value: &FilterValue) {
    if let Some((_, bracketed)) = RANGE_KEYS.iter().find(|(k, _)| *k == key) {
        pairs.push((bracketed.to_string(), value.to_string()));
        return;
    }

    if IDENTITY_KEYS.contains(&key) {
        let name = format!("filter[{}][]", key);
        for member in value.members() {
            pairs.push((name.clone(), member.to_string()));
        }
        return;
    }

    match key {
        "company" => {
            for member in value.members() {
                pairs.push(("filter[company][]".to_string(), member.as_id_token()));
            }
        }
        "company_identifier" => {
            pairs.push((
                "filter[company_identifier[value]]".to_string(),
                value.to_string(),
            ));
        }
        _ => match value {
            FilterValue::List(_) => {
                let name = format!("filter[{}][]", key);
                for member in value.members() {
                    let rendered = if key == "year" {
                        member.to_string()
                    } else {
                        member.as_id_token()
                    };
                    pairs.push((name.clone(), rendered));
                }
            }
            scalar => {
                let rendered = if key == "value" || key == "year" {
                    scalar.to_string()
                } else {
                    scalar.as_id_token()
                };
                pairs.push((format!("filter[{}]", key), rendered));
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{FilterValue, Filters};
    use crate::query::params::ParamSpec;

    const SPEC: ParamSpec = ParamSpec {
        endpoint: &["limit", "offset"],
        filters: &[
            "value_from",
            "value_to",
            "value",
            "year",
            "company",
            "company_identifier",
            "subject_company_name",
            "status",
            "metric",
        ],
    };

    fn pairs(filters: Filters) -> Vec<(String, String)> {
        filters.encode(&SPEC)
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn range_keys() {
        assert_eq!(
            pairs(Filters::new().with("value_from", 10).with("value_to", 20.5)),
            vec![
                pair("filter[value][from]", "10"),
                pair("filter[value][to]", "20.5")
            ]
        );
    }

    #[test]
    fn company_ids_and_names() {
        assert_eq!(
            pairs(Filters::new().with("company", 42)),
            vec![pair("filter[company][]", "~42")]
        );
        assert_eq!(
            pairs(Filters::new().with("company", "Acme")),
            vec![pair("filter[company][]", "Acme")]
        );
        assert_eq!(
            pairs(Filters::new().with(
                "company",
                vec![FilterValue::from(7), FilterValue::from("Acme Corp")]
            )),
            vec![
                pair("filter[company][]", "~7"),
                pair("filter[company][]", "Acme Corp")
            ]
        );
    }

    #[test]
    fn company_identifier_is_comma_joined() {
        assert_eq!(
            pairs(Filters::new().with("company_identifier", vec!["a", "b"])),
            vec![pair("filter[company_identifier[value]]", "a, b")]
        );
    }

    #[test]
    fn identity_keys_are_arrays_even_for_scalars() {
        assert_eq!(
            pairs(Filters::new().with("subject_company_name", "Acme")),
            vec![pair("filter[subject_company_name][]", "Acme")]
        );
    }

    #[test]
    fn years_and_values_stay_literal() {
        assert_eq!(
            pairs(Filters::new().with("year", 2024).with("value", 3)),
            vec![pair("filter[year]", "2024"), pair("filter[value]", "3")]
        );
        assert_eq!(
            pairs(Filters::new().with("year", vec![2022, 2023])),
            vec![pair("filter[year][]", "2022"), pair("filter[year][]", "2023")]
        );
    }

    #[test]
    fn other_filters_sigil_integers() {
        assert_eq!(
            pairs(Filters::new().with("metric", 99).with("status", "all")),
            vec![pair("filter[metric]", "~99"), pair("filter[status]", "all")]
        );
        assert_eq!(
            pairs(Filters::new().with("metric", vec![1, 2])),
            vec![pair("filter[metric][]", "~1"), pair("filter[metric][]", "~2")]
        );
    }

    #[test]
    fn pagination_and_unknown_keys_pass_through() {
        assert_eq!(
            pairs(
                Filters::new()
                    .with_limit(5)
                    .with_offset(0)
                    .with("view", "compact")
            ),
            vec![pair("limit", "5"), pair("offset", "0"), pair("view", "compact")]
        );
    }

    #[test]
    fn nulls_are_dropped() {
        assert!(pairs(
            Filters::new()
                .with("year", None::<i32>)
                .with("company", vec![FilterValue::Null])
                .with("company_identifier", vec![FilterValue::Null])
                .with("value_from", vec![FilterValue::Null, FilterValue::Null])
                .with("value_to", Vec::<i32>::new())
                .with("limit", None::<u32>)
        )
        .is_empty());
    }

    #[test]
    fn resetting_a_key_replaces_it() {
        let filters = Filters::new().with_limit(5).with_limit(10);
        assert_eq!(filters.get("limit"), Some(&FilterValue::Int(10)));
        assert_eq!(pairs(filters), vec![pair("limit", "10")]);
    }

    #[test]
    fn query_string() {
        let url = Url::parse("https://example.com/Answers.json").unwrap();
        let url = Filters::new()
            .with_limit(5)
            .with("company", 42)
            .with("year", 2024)
            .add_to_url(&url, &SPEC);
        insta::assert_snapshot!(
            url.query().unwrap(),
            @"limit=5&filter%5Bcompany%5D%5B%5D=%7E42&filter%5Byear%5D=2024"
        );
    }
}
