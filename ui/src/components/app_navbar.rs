use super::links::{nav_label, nav_link, Brand};
use crate::i18n;
use crate::nav::{self, NavDestination};
use crate::t;
use dioxus::logger::tracing;
use dioxus::prelude::*;

// Navbar stylesheet (also inlined for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Application navbar with active-route highlighting.
///
/// `current_path` comes from the platform router (typically
/// `use_route::<Route>().to_string()`). The link whose path equals it exactly
/// gets the active class; every other link renders in the idle state. An
/// unknown path leaves all links idle.
///
/// Links are built through the registered `NavBuilder` (see
/// `register_nav`), falling back to plain anchors.
///
/// The language selector writes the language the loader ends up on into the
/// platform's `Signal<String>` context (or a local signal when there is
/// none), so the picker never disagrees with the rendered labels.
#[component]
pub fn AppNavbar(current_path: String) -> Element {
    i18n::init();

    // The shell's language signal when provided, else a local one; both start
    // from whatever the loader actually selected.
    let local_lang = use_signal(i18n::current_language);
    let mut lang = try_use_context::<Signal<String>>().unwrap_or(local_lang);
    let selected_lang = lang();
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    let resolved = nav::resolve_destinations(&current_path);
    let active: Option<NavDestination> = resolved
        .iter()
        .find(|(_, state)| state.is_active())
        .map(|(dest, _)| *dest);
    tracing::debug!(?active, lang = %selected_lang, "AppNavbar render path={current_path:?}");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let requested = evt.value();
        match i18n::set_language(&requested) {
            Ok(active_lang) => lang.set(active_lang),
            Err(err) => tracing::warn!("language switch to {requested:?} failed: {err}"),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                Brand {}

                nav { class: "navbar__links", aria_label: t!("nav-aria-label"),
                    for (dest, state) in resolved {
                        {nav_link(dest, state.css_class(), &nav_label(dest))}
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{selected_lang}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", selected: c == selected_lang, "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
