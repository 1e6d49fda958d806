use dioxus::logger::tracing;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let lang = super::use_page_language();
    tracing::trace!("Dashboard render (lang={lang})");

    rsx! {
        section { class: "page page-dashboard",
            h1 { {crate::t!("dashboard-title")} }
            p { {crate::t!("dashboard-intro")} }
        }
    }
}
