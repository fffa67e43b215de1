//! Scroll-reveal wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps any block so it fades and slides in the first time it scrolls into
//! view. The component only owns the `shown` flag; styling is derived from it.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::reveal::{BrowserIntersections, RevealConfig, RevealHandle, register};
use crate::util::reveal::{reveal_class, reveal_style};

/// Block that reveals itself once, on first intersection.
///
/// `delay_ms` offsets the transition start; lists pass
/// [`stagger_delay_ms`](crate::util::reveal::stagger_delay_ms) per item.
#[component]
pub fn Reveal(#[prop(optional)] delay_ms: u32, children: Children) -> impl IntoView {
    let shown = RwSignal::new(false);
    let block_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let handle = StoredValue::new_local(None::<RevealHandle>);
        Effect::new(move || {
            let Some(el) = block_ref.get() else {
                return;
            };
            if handle.with_value(Option::is_some) {
                return;
            }
            let element: &web_sys::Element = el.as_ref();
            let registered = register(&BrowserIntersections, Some(element), &RevealConfig::default(), move || {
                shown.set(true);
            });
            handle.set_value(Some(registered));
        });
        on_cleanup(move || {
            let _ = handle.try_update_value(|slot| {
                if let Some(registered) = slot.take() {
                    registered.unregister();
                }
            });
        });
    }

    view! {
        <div node_ref=block_ref style=reveal_style(delay_ms) class=move || reveal_class(shown.get())>
            {children()}
        </div>
    }
}
