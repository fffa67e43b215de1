//! Typewriter headline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server rendering emits an empty headline; the browser then types the
//! message in one character per tick. The full text is always available to
//! assistive technology through `aria-label`.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::typewriter::{BrowserTicks, TypewriterHandle, start_typewriter};

/// `<h1>` that types `message` in, followed by a blinking cursor.
#[component]
pub fn TypewriterHeadline(message: &'static str) -> impl IntoView {
    let text = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let run = StoredValue::new_local(None::<TypewriterHandle>);
        Effect::new(move || {
            if run.with_value(Option::is_some) {
                return;
            }
            let handle = start_typewriter(&BrowserTicks, message, move |prefix| text.set(prefix.to_owned()));
            run.set_value(Some(handle));
        });
        on_cleanup(move || {
            let _ = run.try_update_value(|slot| {
                if let Some(handle) = slot.take() {
                    handle.stop();
                }
            });
        });
    }

    view! {
        <h1 class="mb-8 text-4xl font-bold tracking-tight" aria-label=message>
            <span aria-hidden="true">{move || text.get()}</span>
            <span class="animate-pulse" aria-hidden="true">"|"</span>
        </h1>
    }
}
