mod filters;
pub use self::filters::{FilterValue, Filters};

pub mod params;
pub use self::params::ParamSpec;
