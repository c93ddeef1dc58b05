//! Recognized pagination and filter parameters of each collection endpoint.

/// Which arguments an endpoint takes verbatim and which as `filter[...]`.
#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    /// Pagination and sorting arguments, sent as `<key>=<value>`.
    pub endpoint: &'static [&'static str],
    /// Filter arguments, sent in the bracketed filter grammar.
    pub filters: &'static [&'static str],
}

impl ParamSpec {
    pub fn is_endpoint_param(&self, key: &str) -> bool {
        self.endpoint.contains(&key)
    }

    pub fn is_filter(&self, key: &str) -> bool {
        self.filters.contains(&key)
    }
}

const PAGINATION: &[&str] = &["limit", "offset"];

pub const COMPANIES: ParamSpec = ParamSpec {
    endpoint: PAGINATION,
    filters: &[
        "name",
        "company_category",
        "company_group",
        "country",
        "company_identifier",
        "bookmark",
    ],
};

pub const METRICS: ParamSpec = ParamSpec {
    endpoint: PAGINATION,
    filters: &[
        "name",
        "bookmark",
        "topic",
        "designer",
        "published",
        "metric_type",
        "value_type",
        "metric_keyword",
        "research_policy",
        "dataset",
        "updated",
    ],
};

pub const TOPICS: ParamSpec = ParamSpec {
    endpoint: PAGINATION,
    filters: &["name", "bookmark"],
};

pub const ANSWERS: ParamSpec = ParamSpec {
    endpoint: PAGINATION,
    filters: &[
        "year",
        "status",
        "company_group",
        "country",
        "value",
        "value_from",
        "value_to",
        "updated",
        "updater",
        "outliers",
        "source",
        "verification",
        "bookmark",
        "published",
        "metric_name",
        "metric_keyword",
        "designer",
        "metric_type",
        "value_type",
        "research_policy",
        "dataset",
        "topic",
        "company_name",
        "company_keyword",
        "company",
        "company_identifier",
        "company_category",
    ],
};

pub const RELATIONSHIP_ANSWERS: ParamSpec = ParamSpec {
    endpoint: PAGINATION,
    filters: &[
        "year",
        "status",
        "value",
        "value_from",
        "value_to",
        "updated",
        "updater",
        "source",
        "verification",
        "published",
        "metric_name",
        "designer",
        "dataset",
        "subject_company_name",
        "object_company_name",
        "subject_company_id",
        "object_company_id",
    ],
};

pub const SOURCES: ParamSpec = ParamSpec {
    endpoint: PAGINATION,
    filters: &[
        "name",
        "wikirate_title",
        "report_type",
        "year",
        "wikirate_link",
        "company_name",
    ],
};

pub const PROJECTS: ParamSpec = ParamSpec {
    endpoint: PAGINATION,
    filters: &["name", "wikirate_status"],
};

pub const DATASETS: ParamSpec = ParamSpec {
    endpoint: PAGINATION,
    filters: &["name", "topic"],
};

pub const REGIONS: ParamSpec = ParamSpec {
    endpoint: PAGINATION,
    filters: &["name"],
};

pub const RESEARCH_GROUPS: ParamSpec = ParamSpec {
    endpoint: PAGINATION,
    filters: &["name"],
};

pub const COMPANY_GROUPS: ParamSpec = ParamSpec {
    endpoint: PAGINATION,
    filters: &["name"],
};
