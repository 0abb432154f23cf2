//! Route template grammar and breadcrumb classification.
//!
//! A template is a `/`-separated sequence of literal segments and
//! parameter segments (leading `:`). A parameter matches any non-empty
//! run of non-separator characters. Classification is pure: the same
//! (templates, path) pair always yields the same answer, and no input
//! can make it fail.

use regex::Regex;

/// The navigable route grammar of the client.
pub const ROUTE_TEMPLATES: &[&str] = &[
    "/",
    "/:username/projects",
    "/:username/projects/join",
    "/:username/projects/create_project",
    "/:username/projects/:projectId",
    "/:username/projects/:projectId/share",
    "/:username/projects/:projectId/:itemType/:itemId",
    "/:username/projects/:projectId/:itemType/:itemId/notes",
];

/// One classified segment of a navigation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// The raw path segment.
    pub segment: String,
    /// The full prefix path ending at this segment.
    pub path: String,
    /// Whether the prefix is safe to re-navigate to. The final segment
    /// of a path is never navigable; it denotes the current location.
    pub navigable: bool,
}

/// Compile a template into an anchored matcher.
///
/// Literal segments are escaped, parameter segments become `[^/]+`, and
/// the result is anchored at both ends so a template only ever matches a
/// whole path, never a substring.
fn template_regex(template: &str) -> Regex {
    let pattern: String = template
        .split('/')
        .map(|segment| {
            if segment.starts_with(':') {
                "[^/]+".to_string()
            } else {
                regex::escape(segment)
            }
        })
        .collect::<Vec<_>>()
        .join("/");
    Regex::new(&format!("^{pattern}$")).expect("escaped template is always a valid pattern")
}

/// Whether `path` exactly matches one of the declared templates.
pub fn is_valid_route(templates: &[&str], path: &str) -> bool {
    templates
        .iter()
        .any(|template| template_regex(template).is_match(path))
}

/// Classify every segment of `path` against the template set.
///
/// A segment is navigable when its prefix path matches some template and
/// it is not the final segment. The root path yields no crumbs.
pub fn breadcrumbs(templates: &[&str], path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let last = segments.len().saturating_sub(1);

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let prefix = format!("/{}", segments[..=index].join("/"));
            let navigable = index != last && is_valid_route(templates, &prefix);
            Crumb {
                segment: (*segment).to_string(),
                path: prefix,
                navigable,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_matches_only_root() {
        assert!(is_valid_route(ROUTE_TEMPLATES, "/"));
        assert!(!is_valid_route(ROUTE_TEMPLATES, "/alice"));
    }

    #[test]
    fn every_declared_template_matches_a_concrete_path() {
        let cases = [
            "/",
            "/alice/projects",
            "/alice/projects/join",
            "/alice/projects/create_project",
            "/alice/projects/42",
            "/alice/projects/42/share",
            "/alice/projects/42/shots/7",
            "/alice/projects/42/shots/7/notes",
        ];
        for path in cases {
            assert!(is_valid_route(ROUTE_TEMPLATES, path), "{path}");
        }
    }

    #[test]
    fn parameters_do_not_match_across_separators() {
        assert!(!is_valid_route(ROUTE_TEMPLATES, "/alice/projects/42/extra/share"));
        assert!(!is_valid_route(ROUTE_TEMPLATES, "/alice/projects/42/shots/7/notes/9"));
    }

    #[test]
    fn literal_segments_are_not_treated_as_patterns() {
        // A literal that happens to contain regex metacharacters must be
        // matched verbatim, not interpreted.
        let templates = &["/docs/a.b"];
        assert!(is_valid_route(templates, "/docs/a.b"));
        assert!(!is_valid_route(templates, "/docs/axb"));
    }

    #[test]
    fn final_segment_is_always_a_label() {
        let crumbs = breadcrumbs(ROUTE_TEMPLATES, "/alice/projects");
        assert_eq!(crumbs.len(), 2);
        assert!(!crumbs[1].navigable, "current location is never a link");
    }

    #[test]
    fn item_path_classification() {
        let templates = &[
            "/:username/projects",
            "/:username/projects/:projectId",
            "/:username/projects/:projectId/:itemType",
            "/:username/projects/:projectId/:itemType/:itemId",
        ];
        let crumbs = breadcrumbs(templates, "/alice/projects/42/shots/7");
        let flags: Vec<bool> = crumbs.iter().map(|c| c.navigable).collect();
        assert_eq!(flags, [false, true, true, true, false]);
        assert_eq!(crumbs[2].path, "/alice/projects/42");
        assert_eq!(crumbs[4].segment, "7");
    }

    #[test]
    fn unmatched_prefixes_render_as_labels() {
        let crumbs = breadcrumbs(ROUTE_TEMPLATES, "/alice/projects/42/shots/7");
        // "/alice" and "/alice/projects/42/shots" match no template.
        assert!(!crumbs[0].navigable);
        assert!(crumbs[1].navigable);
        assert!(crumbs[2].navigable);
        assert!(!crumbs[3].navigable);
        assert!(!crumbs[4].navigable);
    }

    #[test]
    fn classification_is_deterministic() {
        let first = breadcrumbs(ROUTE_TEMPLATES, "/alice/projects/42/shots/7/notes");
        let second = breadcrumbs(ROUTE_TEMPLATES, "/alice/projects/42/shots/7/notes");
        assert_eq!(first, second);
    }

    #[test]
    fn root_path_yields_no_crumbs() {
        assert!(breadcrumbs(ROUTE_TEMPLATES, "/").is_empty());
    }
}
