use crate::{
    ProjectRecord, RouterQuery, SelectionContext, new_project_href, project_href, sanitize_route,
    switchable_projects,
};

pub const NEW_PROJECT_LABEL: &str = "New project";

#[derive(Clone, Debug)]
pub struct ProjectSwitcherInput<'a> {
    pub route: &'a str,
    pub query: &'a RouterQuery,
    pub projects: &'a [ProjectRecord],
    pub selection: &'a SelectionContext,
    /// Outside platform mode there is a single project and the switcher is a plain label.
    pub platform: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectMenuItem {
    pub reference: String,
    pub name: String,
    pub href: String,
    pub selected: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewProjectItem {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProjectDropdown {
    Label {
        label: Option<String>,
    },
    Menu {
        label: Option<String>,
        items: Vec<ProjectMenuItem>,
        new_project: Option<NewProjectItem>,
    },
}

impl ProjectDropdown {
    pub fn label(&self) -> Option<&str> {
        match self {
            ProjectDropdown::Label { label } | ProjectDropdown::Menu { label, .. } => {
                label.as_deref()
            }
        }
    }

    pub fn items(&self) -> &[ProjectMenuItem] {
        match self {
            ProjectDropdown::Label { .. } => &[],
            ProjectDropdown::Menu { items, .. } => items,
        }
    }
}

pub fn project_dropdown(input: &ProjectSwitcherInput<'_>) -> ProjectDropdown {
    let selected = input.selection.selected_project.as_ref();
    let label = selected.map(|project| project.name.clone());

    if !input.platform {
        return ProjectDropdown::Label { label };
    }

    let template = sanitize_route(input.route, input.query);
    let items = switchable_projects(input.projects)
        .into_iter()
        .map(|project| ProjectMenuItem {
            reference: project.reference.clone(),
            name: project.name.clone(),
            href: project_href(&template, &project.reference),
            // Matched on ref rather than display name; names can repeat within an organization.
            selected: selected.is_some_and(|s| s.reference == project.reference),
        })
        .collect();

    let new_project = new_project_href(input.selection.selected_organization.as_deref()).map(
        |href| NewProjectItem {
            label: NEW_PROJECT_LABEL.to_owned(),
            href,
        },
    );

    ProjectDropdown::Menu {
        label,
        items,
        new_project,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProjectStatus;

    fn projects() -> Vec<ProjectRecord> {
        vec![
            ProjectRecord::new("bbb", "Beta", ProjectStatus::Active),
            ProjectRecord::new("aaa", "alpha", ProjectStatus::ActiveHealthy),
            ProjectRecord::new("ggg", "Gamma", ProjectStatus::Inactive),
        ]
    }

    fn selection() -> SelectionContext {
        SelectionContext {
            selected_project: Some(ProjectRecord::new("bbb", "Beta", ProjectStatus::Active)),
            selected_organization: Some("acme".to_owned()),
        }
    }

    #[test]
    fn menu_links_keep_the_common_sub_page() {
        let projects = projects();
        let selection = selection();
        let query = RouterQuery::from_pairs([("ref", "bbb"), ("id", "42")]);
        let dropdown = project_dropdown(&ProjectSwitcherInput {
            route: "/project/[ref]/editor/[id]",
            query: &query,
            projects: &projects,
            selection: &selection,
            platform: true,
        });

        assert_eq!(
            dropdown,
            ProjectDropdown::Menu {
                label: Some("Beta".to_owned()),
                items: vec![
                    ProjectMenuItem {
                        reference: "aaa".to_owned(),
                        name: "alpha".to_owned(),
                        href: "/project/aaa/editor".to_owned(),
                        selected: false,
                    },
                    ProjectMenuItem {
                        reference: "bbb".to_owned(),
                        name: "Beta".to_owned(),
                        href: "/project/bbb/editor".to_owned(),
                        selected: true,
                    },
                ],
                new_project: Some(NewProjectItem {
                    label: "New project".to_owned(),
                    href: "/new/acme".to_owned(),
                }),
            }
        );
    }

    #[test]
    fn single_query_param_keeps_full_route() {
        let projects = projects();
        let selection = selection();
        let query = RouterQuery::from_pairs([("ref", "bbb")]);
        let dropdown = project_dropdown(&ProjectSwitcherInput {
            route: "/project/[ref]/settings/billing/usage",
            query: &query,
            projects: &projects,
            selection: &selection,
            platform: true,
        });

        let hrefs: Vec<&str> = dropdown.items().iter().map(|i| i.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "/project/aaa/settings/billing/usage",
                "/project/bbb/settings/billing/usage"
            ]
        );
    }

    #[test]
    fn routes_without_placeholder_link_to_project_home() {
        let projects = projects();
        let selection = selection();
        let query = RouterQuery::new();
        let dropdown = project_dropdown(&ProjectSwitcherInput {
            route: "/account/me",
            query: &query,
            projects: &projects,
            selection: &selection,
            platform: true,
        });

        assert_eq!(dropdown.items()[0].href, "/project/aaa");
    }

    #[test]
    fn non_platform_mode_renders_a_label() {
        let projects = projects();
        let selection = selection();
        let query = RouterQuery::new();
        let dropdown = project_dropdown(&ProjectSwitcherInput {
            route: "/project/[ref]",
            query: &query,
            projects: &projects,
            selection: &selection,
            platform: false,
        });

        assert_eq!(
            dropdown,
            ProjectDropdown::Label {
                label: Some("Beta".to_owned())
            }
        );
        assert!(dropdown.items().is_empty());
    }

    #[test]
    fn missing_selection_yields_no_label_and_no_new_project_link() {
        let projects = projects();
        let selection = SelectionContext::default();
        let query = RouterQuery::new();
        let dropdown = project_dropdown(&ProjectSwitcherInput {
            route: "/project/[ref]",
            query: &query,
            projects: &projects,
            selection: &selection,
            platform: true,
        });

        let ProjectDropdown::Menu {
            label,
            items,
            new_project,
        } = dropdown
        else {
            panic!("expected a menu");
        };
        assert_eq!(label, None);
        assert!(items.iter().all(|item| !item.selected));
        assert_eq!(new_project, None);
    }
}
