//! Request types for updating models.

use super::{Activity, ActivityStatus, ActivityType};

/// Field merge applied to a single activity.
///
/// Only the supplied fields are written; omitted fields are untouched and
/// there are no field-removal semantics. `order` is deliberately not
/// patchable: position is a derived property, recomputed from array
/// position by the write paths that move elements.
#[derive(Debug, Default)]
pub struct ActivityPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<ActivityType>,
    pub start_time: Option<String>,
    pub duration: Option<u32>,
    pub location: Option<String>,
    pub cost: Option<f64>,
    pub status: Option<ActivityStatus>,
}

impl ActivityPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.kind.is_none()
            && self.start_time.is_none()
            && self.duration.is_none()
            && self.location.is_none()
            && self.cost.is_none()
            && self.status.is_none()
    }

    /// Merge the supplied fields into `activity`, leaving the rest as-is.
    pub fn apply(&self, activity: &mut Activity) {
        if let Some(title) = &self.title {
            activity.title = title.clone();
        }
        if let Some(description) = &self.description {
            activity.description = Some(description.clone());
        }
        if let Some(kind) = self.kind {
            activity.kind = kind;
        }
        if let Some(start_time) = &self.start_time {
            activity.start_time = start_time.clone();
        }
        if let Some(duration) = self.duration {
            activity.duration = duration;
        }
        if let Some(location) = &self.location {
            activity.location = Some(location.clone());
        }
        if let Some(cost) = self.cost {
            activity.cost = Some(cost);
        }
        if let Some(status) = self.status {
            activity.status = status;
        }
    }
}

impl TryFrom<crate::params::PatchActivity> for ActivityPatch {
    type Error = crate::PlannerError;

    /// Convert patch parameters into a validated [`ActivityPatch`].
    ///
    /// Status and type strings are parsed here so that malformed values are
    /// rejected before any persistence attempt.
    fn try_from(params: crate::params::PatchActivity) -> Result<Self, Self::Error> {
        let (status, kind) = params.validate()?;

        Ok(Self {
            title: params.title,
            description: params.description,
            kind,
            start_time: params.start_time,
            duration: params.duration,
            location: params.location,
            cost: params.cost,
            status,
        })
    }
}
