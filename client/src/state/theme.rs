//! Light/dark preference shared through context.
//!
//! DESIGN
//! ======
//! The page keeps a single `RwSignal<ThemeState>`. Components read
//! `preference` for rendering and `ready` to gate the toggle control until
//! the initial resolution has been applied to the document.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual mode applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"light"` or `"dark"` counts
    /// as unset.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the current preference came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeSource {
    /// A value previously persisted by the user.
    Stored,
    /// The environment's `prefers-color-scheme` signal.
    System,
    /// Fixed default used when the environment could not be queried.
    #[default]
    Fallback,
}

/// Theme state provided to the component tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub source: ThemeSource,
    /// Set once the initial preference has been applied to the document.
    pub ready: bool,
}

impl ThemeState {
    pub fn resolved(preference: ThemePreference, source: ThemeSource) -> Self {
        Self { preference, source, ready: true }
    }
}
