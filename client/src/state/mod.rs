//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The page has exactly one piece of shared mutable state, the theme, which
//! is provided as an `RwSignal<ThemeState>` context. Reveal and typewriter
//! state stay private to the component instance that owns them.

pub mod theme;
