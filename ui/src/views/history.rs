use dioxus::logger::tracing;
use dioxus::prelude::*;

#[component]
pub fn History() -> Element {
    let lang = super::use_page_language();
    tracing::trace!("History render (lang={lang})");

    rsx! {
        section { class: "page page-history",
            h1 { {crate::t!("history-title")} }
            p { class: "page__placeholder", {crate::t!("history-intro")} }
        }
    }
}
