use std::collections::BTreeSet;

use crate::navigation::Route;

pub(crate) const SIDEBAR_EXPANDED_WIDTH: f32 = 260.0;
pub(crate) const SIDEBAR_COLLAPSED_WIDTH: f32 = 80.0;

/// Read-only navigation snapshot for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavigationViewModel<'a> {
    pub(crate) active: Route,
    pub(crate) sidebar_expanded: bool,
    pub(crate) expanded_groups: &'a BTreeSet<Route>,
}

impl NavigationViewModel<'_> {
    pub(crate) fn is_group_expanded(&self, route: Route) -> bool {
        self.expanded_groups.contains(&route)
    }

    pub(crate) fn sidebar_width(&self) -> f32 {
        if self.sidebar_expanded {
            SIDEBAR_EXPANDED_WIDTH
        } else {
            SIDEBAR_COLLAPSED_WIDTH
        }
    }
}
