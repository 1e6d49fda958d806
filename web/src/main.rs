use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::nav::NavDestination;
use ui::views::{Dashboard, History, Settings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/history")]
    History {},
    #[route("/settings")]
    Settings {},
}

impl From<NavDestination> for Route {
    fn from(dest: NavDestination) -> Self {
        match dest {
            NavDestination::Dashboard => Route::Dashboard {},
            NavDestination::History => Route::History {},
            NavDestination::Settings => Route::Settings {},
        }
    }
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_link(dest: NavDestination, class: &'static str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::from(dest),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code, seeded from the loader; AppNavbar updates it on
    // selection so routed views re-render.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder { link: nav_link });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppNavbar`, feeding it the
/// current route so it can highlight the matching link.
#[component]
fn WebNavbar() -> Element {
    let route = use_route::<Route>();

    rsx! {
        AppNavbar { current_path: route.to_string() }
        Outlet::<Route> {}
    }
}
