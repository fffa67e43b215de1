//! Theme resolution, application, and persistence.
//!
//! Reads the user's preference from `localStorage` and toggles the `dark`
//! class on the `<html>` element. Every apply writes the value back to
//! `localStorage` so the class and the stored value never disagree.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior. Any storage or media
//! query failure resolves to dark mode and is only logged; SSR paths report
//! [`EnvError::NoWindow`] and therefore render the same fixed default.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::error::EnvError;
use crate::state::theme::{ThemePreference, ThemeSource, ThemeState};

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Preference used when the environment cannot be queried.
pub const FALLBACK_THEME: ThemePreference = ThemePreference::Dark;

/// Browser facilities the resolver depends on.
pub trait ThemeEnv {
    /// Raw value under [`THEME_STORAGE_KEY`], `None` when absent.
    fn read_stored(&self) -> Result<Option<String>, EnvError>;

    /// Persist `value` under [`THEME_STORAGE_KEY`].
    fn write_stored(&self, value: &str) -> Result<(), EnvError>;

    /// Whether the environment reports `prefers-color-scheme: dark`.
    fn prefers_dark(&self) -> Result<bool, EnvError>;

    /// Turn the root presentation flag on (dark) or off (light).
    fn set_root_dark(&self, enabled: bool) -> Result<(), EnvError>;
}

/// Resolves and applies the page theme against an injected environment.
#[derive(Clone, Debug)]
pub struct ThemeResolver<E> {
    env: E,
}

impl<E: ThemeEnv> ThemeResolver<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Determine the starting preference.
    ///
    /// A stored `"light"`/`"dark"` wins outright. Any other stored value is
    /// treated as unset and the ambient signal decides. Storage or media
    /// query failures yield [`FALLBACK_THEME`].
    pub fn resolve_initial(&self) -> (ThemePreference, ThemeSource) {
        let stored = match self.env.read_stored() {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("theme: storage read failed, using fallback: {e}");
                return (FALLBACK_THEME, ThemeSource::Fallback);
            }
        };
        if let Some(pref) = stored.as_deref().and_then(ThemePreference::parse) {
            return (pref, ThemeSource::Stored);
        }

        match self.env.prefers_dark() {
            Ok(true) => (ThemePreference::Dark, ThemeSource::System),
            Ok(false) => (ThemePreference::Light, ThemeSource::System),
            Err(e) => {
                log::warn!("theme: preference query failed, using fallback: {e}");
                (FALLBACK_THEME, ThemeSource::Fallback)
            }
        }
    }

    /// Apply `pref` to the document root and persist it.
    ///
    /// Both writes happen on every call; failures are logged and dropped.
    pub fn apply(&self, pref: ThemePreference) {
        if let Err(e) = self.env.set_root_dark(pref.is_dark()) {
            log::debug!("theme: root flag not updated: {e}");
        }
        if let Err(e) = self.env.write_stored(pref.as_str()) {
            log::debug!("theme: preference not persisted: {e}");
        }
    }

    /// Resolve the starting preference and apply it before anything else
    /// reads the theme.
    pub fn init(&self) -> ThemeState {
        let (preference, source) = self.resolve_initial();
        self.apply(preference);
        log::debug!("theme: initialized to {preference} ({source:?})");
        ThemeState::resolved(preference, source)
    }

    /// Flip `current`, apply the result, and return it.
    pub fn toggle(&self, current: ThemePreference) -> ThemePreference {
        let next = current.toggled();
        self.apply(next);
        next
    }
}

/// Resolve and apply the theme once the page is live in the browser.
///
/// Effects do not run during server rendering, so `theme` keeps its
/// not-ready default there and the toggle renders disabled until this runs.
pub fn install_theme(theme: RwSignal<ThemeState>) {
    Effect::new(move || {
        if theme.get_untracked().ready {
            return;
        }
        theme.set(ThemeResolver::new(BrowserThemeEnv).init());
    });
}

/// `localStorage` + `matchMedia` + `<html>` class list.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeEnv;

#[cfg(feature = "hydrate")]
impl BrowserThemeEnv {
    fn window() -> Result<web_sys::Window, EnvError> {
        web_sys::window().ok_or(EnvError::NoWindow)
    }

    fn storage() -> Result<web_sys::Storage, EnvError> {
        Self::window()?
            .local_storage()
            .map_err(|e| EnvError::Storage(EnvError::js_message(&e)))?
            .ok_or_else(|| EnvError::Storage("localStorage disabled".to_owned()))
    }
}

impl ThemeEnv for BrowserThemeEnv {
    fn read_stored(&self) -> Result<Option<String>, EnvError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .get_item(THEME_STORAGE_KEY)
                .map_err(|e| EnvError::Storage(EnvError::js_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(EnvError::NoWindow)
        }
    }

    fn write_stored(&self, value: &str) -> Result<(), EnvError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .set_item(THEME_STORAGE_KEY, value)
                .map_err(|e| EnvError::Storage(EnvError::js_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Err(EnvError::NoWindow)
        }
    }

    fn prefers_dark(&self) -> Result<bool, EnvError> {
        #[cfg(feature = "hydrate")]
        {
            let query = Self::window()?
                .match_media("(prefers-color-scheme: dark)")
                .map_err(|e| EnvError::MediaQuery(EnvError::js_message(&e)))?
                .ok_or_else(|| EnvError::MediaQuery("matchMedia returned null".to_owned()))?;
            Ok(query.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(EnvError::NoWindow)
        }
    }

    fn set_root_dark(&self, enabled: bool) -> Result<(), EnvError> {
        #[cfg(feature = "hydrate")]
        {
            let root = Self::window()?
                .document()
                .and_then(|doc| doc.document_element())
                .ok_or(EnvError::DocumentRoot)?;
            root.class_list()
                .toggle_with_force(DARK_CLASS, enabled)
                .map(|_| ())
                .map_err(|_| EnvError::DocumentRoot)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = enabled;
            Err(EnvError::NoWindow)
        }
    }
}
