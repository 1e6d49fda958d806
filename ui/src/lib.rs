//! Shared UI crate for the Data Quality Tool. Navigation model, navbars and
//! placeholder views live here; platform crates only supply routing.

pub mod i18n;
pub mod nav;
pub mod views;

pub mod components {
    // Platform link builder + brand block shared by both navbars
    mod links;
    pub use links::{register_nav, NavBuilder};
    #[cfg(test)]
    pub(crate) use links::nav_label;

    // Highlighting navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // Plain navbar without highlighting (components/practice_navbar.rs)
    pub mod practice_navbar;
    pub use practice_navbar::PracticeNavbar;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
    mod navbar_markup;
}
