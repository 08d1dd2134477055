use crate::core::domain::model::severity::{state_label, state_type_label};
use serde::{Deserialize, Serialize};

/// Thresholds that decide which alerts make it onto the dashboard.
///
/// Services are filtered by all three values, hosts only by
/// `min_state_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DashboardFilters {
    pub min_state: i32,
    pub max_state: i32,
    pub min_state_type: i32,
}

impl DashboardFilters {
    pub fn min_state_label(&self) -> &'static str {
        state_label(self.min_state)
    }

    pub fn max_state_label(&self) -> &'static str {
        state_label(self.max_state)
    }

    pub fn min_state_type_label(&self) -> &'static str {
        state_type_label(self.min_state_type)
    }
}

impl Default for DashboardFilters {
    /// Warning and Critical, soft states included.
    fn default() -> Self {
        Self {
            min_state: 1,
            max_state: 2,
            min_state_type: 0,
        }
    }
}
