//! Navigation Matching
//!
//! Decides which navigation entry is highlighted for a route path.

use crate::catalog::NAVIGATION;
use crate::models::NavigationItem;

/// Exact path match; `/dashboard/` and `/Dashboard` do not match `/dashboard`
pub fn is_active(item: &NavigationItem, current_path: &str) -> bool {
    item.path == current_path
}

/// The single highlighted entry for `current_path`, if any
pub fn active_item(current_path: &str) -> Option<&'static NavigationItem> {
    NAVIGATION.iter().find(|item| is_active(item, current_path))
}

/// CSS class for a desktop header link
pub fn link_class(item: &NavigationItem, current_path: &str) -> &'static str {
    if is_active(item, current_path) {
        "nav-link text-primary font-semibold"
    } else {
        "nav-link text-muted-foreground"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_path_marks_exactly_one_item() {
        for item in NAVIGATION {
            let active: Vec<_> = NAVIGATION.iter().filter(|n| is_active(n, item.path)).collect();
            assert_eq!(active.len(), 1, "path {}", item.path);
            assert_eq!(active[0].label, item.label);
        }
    }

    #[test]
    fn test_unknown_path_has_no_active_item() {
        assert!(active_item("/pricing").is_none());
        assert!(active_item("/dashboard/").is_none());
        assert!(active_item("").is_none());
    }

    #[test]
    fn test_root_does_not_match_nested_paths() {
        assert_eq!(active_item("/").map(|n| n.label), Some("Home"));
        assert_eq!(active_item("/team").map(|n| n.label), Some("Team"));
    }

    #[test]
    fn test_link_class() {
        let home = &NAVIGATION[0];
        assert!(link_class(home, "/").contains("text-primary"));
        assert!(link_class(home, "/contact").contains("text-muted-foreground"));
    }

    #[test]
    fn test_active_item_label_for_every_route() {
        for item in NAVIGATION {
            assert_eq!(active_item(item.path).map(|n| n.label), Some(item.label));
        }
    }
}
