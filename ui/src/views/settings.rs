use dioxus::logger::tracing;
use dioxus::prelude::*;

#[component]
pub fn Settings() -> Element {
    let lang = super::use_page_language();
    tracing::trace!("Settings render (lang={lang})");

    rsx! {
        section { class: "page page-settings",
            h1 { {crate::t!("settings-title")} }
            p { {crate::t!("settings-intro")} }
        }
    }
}
