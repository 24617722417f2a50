use std::collections::BTreeSet;

use crate::navigation::Route;

/// Which view is active and which sidebar groups are open.
#[derive(Debug)]
pub(super) struct NavigationState {
    active: Route,
    expanded_groups: BTreeSet<Route>,
    sidebar_expanded: bool,
}

impl NavigationState {
    pub(super) fn new(active: Route, sidebar_expanded: bool) -> Self {
        Self {
            active,
            expanded_groups: BTreeSet::new(),
            sidebar_expanded,
        }
    }

    pub(super) fn active(&self) -> Route {
        self.active
    }

    pub(super) fn expanded_groups(&self) -> &BTreeSet<Route> {
        &self.expanded_groups
    }

    pub(super) fn is_sidebar_expanded(&self) -> bool {
        self.sidebar_expanded
    }

    /// Make `route` active, returning the previous route when it changed.
    pub(super) fn navigate_to(&mut self, route: Route) -> Option<Route> {
        if self.active == route {
            return None;
        }
        let previous = std::mem::replace(&mut self.active, route);
        Some(previous)
    }

    pub(super) fn toggle_group(&mut self, route: Route) {
        if !self.expanded_groups.remove(&route) {
            self.expanded_groups.insert(route);
        }
    }

    pub(super) fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }
}
