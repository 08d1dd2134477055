use crate::core::domain::model::dashboard_filters::DashboardFilters;

/// Per-request overrides of the configured filters.
///
/// Parsed from the query string of a dashboard request
/// (`?minState=2&maxState=3&minStateType=1`). Values that are missing or
/// not integers are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardQuery {
    pub min_state: Option<i32>,
    pub max_state: Option<i32>,
    pub min_state_type: Option<i32>,
}

impl DashboardQuery {
    /// Reads the overrides from a raw query string (without the leading `?`).
    ///
    /// Only the first occurrence of a parameter counts, even if it is not a
    /// valid integer.
    pub fn parse(query: &str) -> Self {
        let pairs: Vec<_> =
            url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()).collect();
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .and_then(|(_, value)| value.parse::<i32>().ok())
        };

        Self {
            min_state: first("minState"),
            max_state: first("maxState"),
            min_state_type: first("minStateType"),
        }
    }

    /// Applies the overrides on top of `defaults`.
    pub fn resolve(&self, defaults: &DashboardFilters) -> DashboardFilters {
        DashboardFilters {
            min_state: self.min_state.unwrap_or(defaults.min_state),
            max_state: self.max_state.unwrap_or(defaults.max_state),
            min_state_type: self.min_state_type.unwrap_or(defaults.min_state_type),
        }
    }
}
