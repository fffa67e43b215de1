//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections from static content. Only `reveal`,
//! `typewriter`, and `theme_toggle` carry behavior, and each delegates it to
//! the matching core in `util`.

pub mod backdrop;
pub mod blog_list;
pub mod project_card;
pub mod reveal;
pub mod theme_toggle;
pub mod typewriter;
