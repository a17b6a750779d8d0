pub const PROJECT_REF_PLACEHOLDER: &str = "[ref]";

pub fn default_project_href(reference: &str) -> String {
    format!("/project/{reference}")
}

/// Substitutes the first `[ref]` placeholder of a sanitized route template.
/// Templates without a placeholder fall back to the project's home page.
pub fn project_href(template: &str, reference: &str) -> String {
    if template.contains(PROJECT_REF_PLACEHOLDER) {
        template.replacen(PROJECT_REF_PLACEHOLDER, reference, 1)
    } else {
        default_project_href(reference)
    }
}

pub fn new_project_href(organization_slug: Option<&str>) -> Option<String> {
    organization_slug
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .map(|slug| format!("/new/{slug}"))
}
