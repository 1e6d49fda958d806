use std::collections::BTreeSet;

/// Every non-fallback locale must define at least the keys of the en-US
/// fallback, with no duplicate definitions.
///
/// Adding a locale:
/// 1. Create `ui/i18n/<locale>/dq-ui.ftl` with every key from en-US.
/// 2. Register it in `LOCALES` below.
/// 3. Run `cargo test -p dq-ui`.
const EN_US: &str = include_str!("../i18n/en-US/dq-ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/dq-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/dq-ui.ftl")),
];

/// Message ids in definition order (comments, terms and attributes skipped).
fn message_ids(src: &str) -> Vec<&str> {
    src.lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && !line.starts_with('#')
                && !line.starts_with('.')
                && !line.starts_with('-')
        })
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
        .collect()
}

fn duplicates<'a>(ids: &[&'a str]) -> BTreeSet<&'a str> {
    let mut seen = BTreeSet::new();
    ids.iter().copied().filter(|id| !seen.insert(*id)).collect()
}

#[test]
fn fallback_defines_navbar_keys_once() {
    let ids = message_ids(EN_US);
    for key in [
        "brand-name",
        "nav-dashboard",
        "nav-history",
        "nav-settings",
        "nav-aria-label",
    ] {
        assert!(ids.contains(&key), "en-US is missing `{key}`");
    }
    assert!(duplicates(&ids).is_empty(), "en-US has duplicate keys");
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback: BTreeSet<&str> = message_ids(EN_US).into_iter().collect();
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        let ids = message_ids(src);
        let dups = duplicates(&ids);
        if !dups.is_empty() {
            failures.push(format!("{locale} defines keys twice: {dups:?}"));
        }

        let present: BTreeSet<&str> = ids.into_iter().collect();
        let missing: Vec<&str> = fallback.difference(&present).copied().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "{locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n\n")
    );
}
