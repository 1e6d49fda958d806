//! Placeholder pages mounted by the platform routers.

use dioxus::prelude::*;

mod dashboard;
pub use dashboard::Dashboard;

mod history;
pub use history::History;

mod settings;
pub use settings::Settings;

/// Subscribe the calling page to the shell's language signal (if any) so it
/// re-renders on a switch. Returns the language tag it rendered for.
fn use_page_language() -> String {
    try_use_context::<Signal<String>>()
        .map(|lang| lang())
        .unwrap_or_else(crate::i18n::current_language)
}
