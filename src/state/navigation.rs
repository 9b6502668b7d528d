//! Navigation-related state types.
//!
//! This module contains enums and types related to navigation, the top
//! navigation bar, views, and focus.

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    NavBar,
    View,
}

/// Specifying the links shown in the navigation bar.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavLink {
    Dashboard,
    Issues,
}

impl NavLink {
    /// Return the display label for the link.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Dashboard => "Dashboard",
            NavLink::Issues => "Issues",
        }
    }

    /// Return the view the link navigates to.
    ///
    pub fn view(&self) -> View {
        match self {
            NavLink::Dashboard => View::Dashboard,
            NavLink::Issues => View::Issues,
        }
    }
}

/// Return the navigation bar links in display order.
///
pub fn nav_links() -> Vec<NavLink> {
    vec![NavLink::Dashboard, NavLink::Issues]
}

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum View {
    Dashboard,
    Issues,
    NewIssue,
}
