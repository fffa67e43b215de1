//! Light/dark toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `RwSignal<ThemeState>`. The button stays
//! disabled until the initial preference has been applied so a click can
//! never race the first resolution.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::theme::{ThemePreference, ThemeSource, ThemeState};
use crate::util::theme::{BrowserThemeEnv, ThemeEnv, ThemeResolver};

/// Label naming the mode a click switches to.
fn toggle_label(current: ThemePreference) -> &'static str {
    match current {
        ThemePreference::Dark => "Light",
        ThemePreference::Light => "Dark",
    }
}

/// Apply the opposite of `state` through `resolver` and return the new state.
/// A state that is not ready yet is returned unchanged.
fn toggled_state<E: ThemeEnv>(resolver: &ThemeResolver<E>, state: ThemeState) -> ThemeState {
    if !state.ready {
        return state;
    }
    let preference = resolver.toggle(state.preference);
    ThemeState { preference, source: ThemeSource::Stored, ready: true }
}

/// Sun with its rays, drawn as a single filled path.
const SUN_PATH: &str = "M12 4.5a1 1 0 0 1 1 1V7a1 1 0 1 1-2 0V5.5a1 1 0 0 1 1-1Zm0 10.5a3.5 3.5 0 1 0 0-7 3.5 3.5 0 0 0 0 7Zm7-3.5a1 1 0 0 1 1 1v.01a1 1 0 1 1-2 0V12.5a1 1 0 0 1 1-1Zm-12 0a1 1 0 0 1 1 1v.01a1 1 0 1 1-2 0V12.5a1 1 0 0 1 1-1ZM5.76 6.82a1 1 0 0 1 1.41 0l1 1a1 1 0 1 1-1.41 1.41l-1-1a1 1 0 0 1 0-1.41Zm10.07 10.07a1 1 0 0 1 1.41 0l1 1a1 1 0 1 1-1.41 1.41l-1-1a1 1 0 0 1 0-1.41ZM4.5 12.5a1 1 0 0 1 1-1H7a1 1 0 1 1 0 2H5.5a1 1 0 0 1-1-1Zm10.07-4.27a1 1 0 0 1 0-1.41l1-1a1 1 0 1 1 1.41 1.41l-1 1a1 1 0 0 1-1.41 0Zm-8.66 8.66a1 1 0 0 1 0-1.41l1-1a1 1 0 0 1 1.41 1.41l-1 1a1 1 0 0 1-1.41 0Zm6.09 1.59a1 1 0 0 1 1-1H13a1 1 0 1 1 0 2h-.01a1 1 0 0 1-1-1Z";

const MOON_PATH: &str = "M21 12.75A9.25 9.25 0 0 1 9.02 21a.75.75 0 0 1-.53-1.3 7.75 7.75 0 0 0 9.8-9.8.75.75 0 0 1 1.3-.53c.89.95 1.41 2.22 1.41 3.88Z";

#[component]
fn SunIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" aria-hidden="true" class="h-4 w-4 text-purple-500" fill="currentColor">
            <path d=SUN_PATH/>
        </svg>
    }
}

#[component]
fn MoonIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" aria-hidden="true" class="h-4 w-4 text-purple-500" fill="currentColor">
            <path d=MOON_PATH/>
        </svg>
    }
}

/// Pill button switching between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let resolver = ThemeResolver::new(BrowserThemeEnv);

    let on_click = move |_| {
        let next = toggled_state(&resolver, theme.get_untracked());
        theme.set(next);
    };

    view! {
        <button
            type="button"
            class="flex items-center gap-2 rounded-full border border-neutral-200 bg-white px-3 py-1.5 text-sm text-purple-700 shadow-sm transition hover:bg-purple-50 hover:shadow md:px-3.5 md:py-2 dark:border-neutral-800 dark:bg-black/40 dark:text-violet-200 dark:hover:bg-black/60"
            aria-label="Toggle theme"
            title="Toggle theme"
            disabled=move || !theme.get().ready
            on:click=on_click
        >
            {move || {
                if theme.get().preference.is_dark() {
                    view! { <SunIcon/> }.into_any()
                } else {
                    view! { <MoonIcon/> }.into_any()
                }
            }}
            <span class="hidden sm:inline">{move || toggle_label(theme.get().preference)}</span>
        </button>
    }
}
