#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::nav::NavDestination;
use ui::views::{Dashboard, History, Settings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
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

// Shared theme (ui/assets/theme/main.css), always inlined on desktop.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!(
                            "Data Quality Tool – v{}",
                            env!("CARGO_PKG_VERSION")
                        ))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(dest: NavDestination, class: &'static str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::from(dest), "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code, seeded from the loader; AppNavbar updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder { link: nav_link });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language so the routed subtree remounts on change
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // `cargo run` / `dx serve` load straight from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific layout around the shared `AppNavbar`, feeding it the
/// current route so it can highlight the matching link.
#[component]
fn DesktopNavbar() -> Element {
    let route = use_route::<Route>();

    rsx! {
        AppNavbar { current_path: route.to_string() }

        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths_match_navigation_model() {
        for dest in NavDestination::ALL {
            assert_eq!(Route::from(dest).to_string(), dest.path());
        }
    }
}
