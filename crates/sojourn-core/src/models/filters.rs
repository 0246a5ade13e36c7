//! Filter types for querying plans.

use super::PlanStatus;

/// Filter options for querying plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Filter by a single plan status
    pub status: Option<PlanStatus>,

    /// Show all plans regardless of status
    pub include_archived: bool,
}

impl From<&crate::params::ListPlans> for PlanFilter {
    /// Convert ListPlans parameters to a PlanFilter for plan queries.
    ///
    /// - `archived: false` → every status except archived
    /// - `archived: true` → archived plans only
    fn from(params: &crate::params::ListPlans) -> Self {
        if params.archived {
            Self {
                status: Some(PlanStatus::Archived),
                include_archived: true,
            }
        } else {
            Self {
                status: None,
                include_archived: false,
            }
        }
    }
}
