//! Navigation model and active-route highlighting.
//!
//! The shell exposes a fixed set of destinations. Given the current path
//! reported by the platform router, every destination is put in exactly one
//! of two presentation states:
//!
//! - `LinkState::Active`  – the destination path equals the current path
//! - `LinkState::Default` – anything else
//!
//! Matching is exact string equality. `"/history/"` does not match
//! `"/history"`, and an unknown path simply leaves every link in the default
//! state.
//!
//! Everything here is pure and platform-agnostic; the components in
//! `crate::components` only turn the result into markup.
//!
//! ```ignore
//! let items = nav::resolve("/history", &nav::NAV_ROUTES);
//! for item in items {
//!     rsx! { a { class: item.state.css_class(), href: item.path, "{item.label}" } };
//! }
//! ```

/// A single navigation destination: where it points and what it is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteDescriptor {
    pub path: &'static str,
    /// English label (the navbars localise through `NavDestination` instead).
    pub label: &'static str,
}

/// The navbar's destinations in display order.
pub const NAV_ROUTES: [RouteDescriptor; 3] = [
    NavDestination::Dashboard.descriptor(),
    NavDestination::History.descriptor(),
    NavDestination::Settings.descriptor(),
];

/// Typed name for each entry of `NAV_ROUTES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDestination {
    Dashboard,
    History,
    Settings,
}

impl NavDestination {
    pub const ALL: [NavDestination; 3] = [Self::Dashboard, Self::History, Self::Settings];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::History => "/history",
            Self::Settings => "/settings",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::History => "History",
            Self::Settings => "Settings",
        }
    }

    pub const fn descriptor(self) -> RouteDescriptor {
        RouteDescriptor {
            path: self.path(),
            label: self.label(),
        }
    }

    /// Reverse lookup (exact match, same rule as highlighting).
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dest| dest.path() == path)
    }
}

/// Presentation state of one navbar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkState {
    Active,
    Default,
}

impl LinkState {
    /// Class shared by every navbar link, highlighted or not.
    pub const BASE_CLASS: &'static str = "navbar__link";

    pub fn for_path(current_path: &str, path: &str) -> Self {
        if is_active(current_path, path) {
            Self::Active
        } else {
            Self::Default
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Full class list for a link in this state.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Active => "navbar__link navbar__link--active",
            Self::Default => "navbar__link navbar__link--idle",
        }
    }
}

/// One resolved navbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem<'a> {
    pub label: &'a str,
    pub path: &'a str,
    pub state: LinkState,
}

impl NavItem<'_> {
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }
}

pub fn is_active(current_path: &str, path: &str) -> bool {
    current_path == path
}

/// Resolve every descriptor against the current path, preserving order.
pub fn resolve<'a>(current_path: &str, routes: &'a [RouteDescriptor]) -> Vec<NavItem<'a>> {
    routes
        .iter()
        .map(|route| NavItem {
            label: route.label,
            path: route.path,
            state: LinkState::for_path(current_path, route.path),
        })
        .collect()
}

/// First descriptor highlighted for `current_path`, if any.
pub fn active_route<'a>(
    current_path: &str,
    routes: &'a [RouteDescriptor],
) -> Option<&'a RouteDescriptor> {
    routes
        .iter()
        .find(|route| is_active(current_path, route.path))
}

/// Same evaluation as `resolve`, keyed by destination so callers can
/// localise labels.
pub fn resolve_destinations(current_path: &str) -> Vec<(NavDestination, LinkState)> {
    NavDestination::ALL
        .into_iter()
        .map(|dest| (dest, LinkState::for_path(current_path, dest.path())))
        .collect()
}
