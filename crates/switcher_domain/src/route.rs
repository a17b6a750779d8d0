//! Route template sanitizing for project switching.
//!
//! Any router query beyond the project ref is assumed to identify something that only
//! exists inside the current project (a table, a log query, ...). When switching projects
//! the route is cut back to the deepest level that still makes sense elsewhere.

use crate::RouterQuery;

pub const QUERY_STRING_KEY: &str = "q";

/// Segments kept after splitting on `/`, counting the empty segment before the leading slash.
/// `/project/[ref]/editor/123` keeps `/project/[ref]/editor`.
pub const SEGMENTS_KEPT: usize = 4;

/// Pages carrying a free-text `q` search keep one extra level,
/// e.g. `/project/[ref]/logs/explorer?q=...`.
pub const SEGMENTS_KEPT_WITH_QUERY_STRING: usize = 5;

pub fn sanitize_route(route: &str, query: &RouterQuery) -> String {
    if query.len() <= 1 {
        return route.to_owned();
    }

    let keep = if query.contains_key(QUERY_STRING_KEY) {
        SEGMENTS_KEPT_WITH_QUERY_STRING
    } else {
        SEGMENTS_KEPT
    };

    route.split('/').take(keep).collect::<Vec<_>>().join("/")
}
