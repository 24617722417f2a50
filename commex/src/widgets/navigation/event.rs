use crate::navigation::Route;

/// Intent events handled by the navigation widget.
#[derive(Debug, Clone)]
pub(crate) enum NavigationIntent {
    /// Sidebar entry pressed. Entries with children also flip their group.
    SelectEntry(Route),
    /// Child row pressed under an expanded group.
    SelectChild { parent: Route, child: Route },
    /// Chevron pressed: expand or collapse without navigating.
    ToggleGroup(Route),
    ToggleSidebar,
    /// Request from a screen to show another view.
    NavigateTo(Route),
    /// Header logo pressed.
    GoHome,
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NavigationEffect {
    ActiveChanged { from: Route, to: Route },
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    /// Intent event reduced by the navigation widget.
    Intent(NavigationIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NavigationEffect),
}
