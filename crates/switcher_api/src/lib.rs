use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PROTOCOL_VERSION: u32 = 1;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectRef(pub String);

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValueSnapshot {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(rename = "ref")]
    pub reference: ProjectRef,
    pub name: String,
    /// Wire status such as `ACTIVE_HEALTHY` or `INACTIVE`; unknown values are tolerated.
    pub status: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    #[serde(default)]
    pub selected_project: Option<ProjectSnapshot>,
    #[serde(default)]
    pub selected_organization_slug: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SanitizeRouteRequest {
    pub route: String,
    #[serde(default)]
    pub query: BTreeMap<String, QueryValueSnapshot>,
    /// Raw search string (`?q=...`), merged into `query` when present.
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SanitizeRouteResponse {
    pub route: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProjectSwitcherRequest {
    pub route: String,
    #[serde(default)]
    pub query: BTreeMap<String, QueryValueSnapshot>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub projects: Vec<ProjectSnapshot>,
    #[serde(default)]
    pub selection: SelectionSnapshot,
    /// Overrides the server's configured platform mode.
    #[serde(default)]
    pub platform: Option<bool>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProjectMenuItemSnapshot {
    #[serde(rename = "ref")]
    pub reference: ProjectRef,
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewProjectSnapshot {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectDropdownSnapshot {
    Label {
        label: Option<String>,
    },
    Menu {
        label: Option<String>,
        items: Vec<ProjectMenuItemSnapshot>,
        #[serde(default)]
        new_project: Option<NewProjectSnapshot>,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VersionSnapshot {
    pub protocol_version: u32,
}
