//! Project switcher logic: pure functions over already-resolved route, query and
//! project data. No IO and no async within this crate.

mod collate;
pub use collate::locale_compare;

mod query;
pub use query::{QueryValue, RouterQuery};

pub mod route;
pub use route::sanitize_route;

mod project;
pub use project::{
    ProjectRecord, ProjectStatus, SelectionContext, parse_project_status, switchable_projects,
};

mod href;
pub use href::{PROJECT_REF_PLACEHOLDER, default_project_href, new_project_href, project_href};

mod dropdown;
pub use dropdown::{
    NEW_PROJECT_LABEL, NewProjectItem, ProjectDropdown, ProjectMenuItem, ProjectSwitcherInput,
    project_dropdown,
};
