use super::links::{nav_label, nav_link};
use crate::i18n;
use crate::nav::{LinkState, NavDestination};
use crate::t;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Simple navbar: text-only brand and the same destinations as `AppNavbar`,
/// each link in its own group with the base class only. It never looks at
/// the current route, so nothing is highlighted.
#[component]
pub fn PracticeNavbar() -> Element {
    i18n::init();
    let brand = t!("brand-name");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {nav_link(NavDestination::Dashboard, "navbar__brand-link", &brand)}
                }
                for dest in NavDestination::ALL {
                    div { class: "navbar__group",
                        {nav_link(dest, LinkState::BASE_CLASS, &nav_label(dest))}
                    }
                }
            }
        }
    }
}
