use std::collections::BTreeMap;
use switcher_api::{
    NewProjectSnapshot, ProjectDropdownSnapshot, ProjectMenuItemSnapshot, ProjectRef,
    ProjectSnapshot, QueryValueSnapshot, SelectionSnapshot,
};
use switcher_domain::{
    ProjectDropdown, ProjectMenuItem, ProjectRecord, QueryValue, RouterQuery, SelectionContext,
    parse_project_status,
};

/// Explicit query entries win over keys parsed from the raw search string.
pub(crate) fn router_query(
    query: &BTreeMap<String, QueryValueSnapshot>,
    search: Option<&str>,
) -> RouterQuery {
    let mut out = search.map(RouterQuery::parse_search).unwrap_or_default();
    for (key, value) in query {
        let value = match value {
            QueryValueSnapshot::Single(v) => QueryValue::Single(v.clone()),
            QueryValueSnapshot::Multiple(v) => QueryValue::Multiple(v.clone()),
        };
        out.insert(key.clone(), value);
    }
    out
}

pub(crate) fn project_record(snapshot: &ProjectSnapshot) -> ProjectRecord {
    ProjectRecord::new(
        snapshot.reference.0.clone(),
        snapshot.name.clone(),
        parse_project_status(&snapshot.status),
    )
}

pub(crate) fn selection_context(snapshot: &SelectionSnapshot) -> SelectionContext {
    SelectionContext {
        selected_project: snapshot.selected_project.as_ref().map(project_record),
        selected_organization: snapshot.selected_organization_slug.clone(),
    }
}

fn menu_item_snapshot(item: ProjectMenuItem) -> ProjectMenuItemSnapshot {
    ProjectMenuItemSnapshot {
        reference: ProjectRef(item.reference),
        name: item.name,
        href: item.href,
        selected: item.selected,
    }
}

pub(crate) fn dropdown_snapshot(dropdown: ProjectDropdown) -> ProjectDropdownSnapshot {
    match dropdown {
        ProjectDropdown::Label { label } => ProjectDropdownSnapshot::Label { label },
        ProjectDropdown::Menu {
            label,
            items,
            new_project,
        } => ProjectDropdownSnapshot::Menu {
            label,
            items: items.into_iter().map(menu_item_snapshot).collect(),
            new_project: new_project.map(|item| NewProjectSnapshot {
                label: item.label,
                href: item.href,
            }),
        },
    }
}
