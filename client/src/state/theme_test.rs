use super::*;

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn preference_default_is_dark() {
    assert_eq!(ThemePreference::default(), ThemePreference::Dark);
}

#[test]
fn parse_accepts_only_exact_values() {
    assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
    assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::parse("Dark"), None);
    assert_eq!(ThemePreference::parse(" light"), None);
    assert_eq!(ThemePreference::parse("garbage"), None);
    assert_eq!(ThemePreference::parse(""), None);
}

#[test]
fn toggled_twice_returns_original() {
    for pref in [ThemePreference::Light, ThemePreference::Dark] {
        assert_ne!(pref.toggled(), pref);
        assert_eq!(pref.toggled().toggled(), pref);
    }
}

#[test]
fn display_matches_storage_string() {
    assert_eq!(ThemePreference::Light.to_string(), "light");
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn default_state_is_not_ready() {
    let state = ThemeState::default();
    assert!(!state.ready);
    assert_eq!(state.source, ThemeSource::Fallback);
}

#[test]
fn resolved_state_is_ready() {
    let state = ThemeState::resolved(ThemePreference::Light, ThemeSource::System);
    assert!(state.ready);
    assert_eq!(state.preference, ThemePreference::Light);
    assert_eq!(state.source, ThemeSource::System);
}
