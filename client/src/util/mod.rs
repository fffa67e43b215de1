//! Behavior cores and browser helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one browser facility (storage, media queries,
//! intersection observers, timers) behind a small trait so components stay
//! declarative and the cores can be tested without a browser.

pub mod markdown;
pub mod reveal;
pub mod subscription;
#[cfg(test)]
pub(crate) mod testing;
pub mod theme;
pub mod typewriter;
