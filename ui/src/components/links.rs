use crate::nav::NavDestination;
use crate::t;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platform hook for building navbar links.
///
/// `ui` does not know each platform's `Route` enum, so platforms register a
/// builder that turns a destination into a fully constructed `Link`. The
/// navbars pass in the class list to apply and the localized label; the
/// returned element must contain exactly that label as its child.
///
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// use ui::nav::NavDestination;
///
/// fn nav_link(dest: NavDestination, class: &'static str, label: &str) -> Element {
///     let to = match dest {
///         NavDestination::Dashboard => Route::Dashboard {},
///         NavDestination::History => Route::History {},
///         NavDestination::Settings => Route::Settings {},
///     };
///     rsx!(Link { class: "{class}", to, "{label}" })
/// }
///
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// Without a registered builder the navbars render plain anchors pointing at
/// `NavDestination::path()`.
pub struct NavBuilder {
    pub link: fn(dest: NavDestination, class: &'static str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Register the platform link builder. First registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::trace!("nav builder already registered; keeping the first one");
    }
}

pub(crate) fn nav_label(dest: NavDestination) -> String {
    match dest {
        NavDestination::Dashboard => t!("nav-dashboard"),
        NavDestination::History => t!("nav-history"),
        NavDestination::Settings => t!("nav-settings"),
    }
}

pub(crate) fn nav_link(dest: NavDestination, class: &'static str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(dest, class, label),
        None => rsx! {
            a { class: "{class}", href: dest.path(), "{label}" }
        },
    }
}

/// `AppNavbar` brand block: chart glyph plus a link home.
#[component]
pub(crate) fn Brand() -> Element {
    let name = t!("brand-name");

    rsx! {
        div { class: "navbar__brand",
            svg {
                class: "navbar__brand-icon",
                fill: "none",
                "viewBox": "0 0 24 24",
                stroke: "currentColor",
                "aria-hidden": "true",
                path {
                    "stroke-linecap": "round",
                    "stroke-linejoin": "round",
                    "stroke-width": "2",
                    d: "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
                }
            }
            {nav_link(NavDestination::Dashboard, "navbar__brand-link", &name)}
        }
    }
}
