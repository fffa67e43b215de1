use super::*;
use crate::util::testing::MemoryThemeEnv;

#[test]
fn label_names_the_target_mode() {
    assert_eq!(toggle_label(ThemePreference::Dark), "Light");
    assert_eq!(toggle_label(ThemePreference::Light), "Dark");
}

#[test]
fn toggled_state_ignores_clicks_before_ready() {
    let resolver = ThemeResolver::new(MemoryThemeEnv::new());
    let state = ThemeState::default();
    assert_eq!(toggled_state(&resolver, state), state);
    assert!(resolver.env().writes().is_empty());
}

#[test]
fn toggled_state_flips_and_persists() {
    let resolver = ThemeResolver::new(MemoryThemeEnv::new());
    let state = ThemeState::resolved(ThemePreference::Light, ThemeSource::System);
    let next = toggled_state(&resolver, state);
    assert_eq!(next.preference, ThemePreference::Dark);
    assert_eq!(next.source, ThemeSource::Stored);
    assert!(next.ready);
    assert_eq!(resolver.env().stored().as_deref(), Some("dark"));
    assert_eq!(resolver.env().root_dark(), Some(true));
}

#[test]
fn sun_icon_is_one_path_with_center_disc() {
    assert!(SUN_PATH.starts_with("M12 4.5"));
    assert!(SUN_PATH.contains("Zm0 10.5a3.5 3.5 0 1 0 0-7 3.5 3.5 0 0 0 0 7Z"));
    assert_eq!(SUN_PATH.matches('M').count() + SUN_PATH.matches('m').count(), 10);
    assert_ne!(SUN_PATH, MOON_PATH);
}
