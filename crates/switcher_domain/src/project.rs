use crate::locale_compare;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    ActiveHealthy,
    Active,
    Inactive,
    ComingUp,
    GoingDown,
    Pausing,
    Restoring,
    Removed,
    InitFailed,
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::ActiveHealthy => "ACTIVE_HEALTHY",
            ProjectStatus::Active => "ACTIVE",
            ProjectStatus::Inactive => "INACTIVE",
            ProjectStatus::ComingUp => "COMING_UP",
            ProjectStatus::GoingDown => "GOING_DOWN",
            ProjectStatus::Pausing => "PAUSING",
            ProjectStatus::Restoring => "RESTORING",
            ProjectStatus::Removed => "REMOVED",
            ProjectStatus::InitFailed => "INIT_FAILED",
            ProjectStatus::Unknown => "UNKNOWN",
        }
    }
}

pub fn parse_project_status(value: &str) -> ProjectStatus {
    let value = value.trim();
    [
        ProjectStatus::ActiveHealthy,
        ProjectStatus::Active,
        ProjectStatus::Inactive,
        ProjectStatus::ComingUp,
        ProjectStatus::GoingDown,
        ProjectStatus::Pausing,
        ProjectStatus::Restoring,
        ProjectStatus::Removed,
        ProjectStatus::InitFailed,
    ]
    .into_iter()
    .find(|status| value.eq_ignore_ascii_case(status.as_str()))
    .unwrap_or(ProjectStatus::Unknown)
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "ref")]
    pub reference: String,
    pub name: String,
    pub status: ProjectStatus,
}

impl ProjectRecord {
    pub fn new(
        reference: impl Into<String>,
        name: impl Into<String>,
        status: ProjectStatus,
    ) -> Self {
        Self {
            reference: reference.into(),
            name: name.into(),
            status,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SelectionContext {
    #[serde(default)]
    pub selected_project: Option<ProjectRecord>,
    /// Slug of the selected organization.
    #[serde(default)]
    pub selected_organization: Option<String>,
}

/// Projects offered in the switcher: everything except `INACTIVE`, ordered by name.
/// Sorting is stable, so projects sharing a name keep their input order.
pub fn switchable_projects(projects: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    let mut out: Vec<&ProjectRecord> = projects
        .iter()
        .filter(|project| project.status != ProjectStatus::Inactive)
        .collect();
    out.sort_by(|a, b| locale_compare(&a.name, &b.name));
    out
}
