//! Decorative page backgrounds.

#[cfg(test)]
#[path = "backdrop_test.rs"]
mod backdrop_test;

use leptos::prelude::*;

use crate::content::Backdrop;

/// Container classes. The glow variant only exists in dark mode.
fn container_class(variant: Backdrop) -> &'static str {
    match variant {
        Backdrop::Glow => "pointer-events-none absolute inset-0 hidden dark:block",
        Backdrop::Plain | Backdrop::Gradient | Backdrop::Aurora => "pointer-events-none absolute inset-0",
    }
}

/// One class string per stacked layer, back to front.
fn layer_classes(variant: Backdrop) -> &'static [&'static str] {
    match variant {
        Backdrop::Plain => &[],
        Backdrop::Glow => &[
            "absolute inset-0 bg-[radial-gradient(600px_300px_at_20%_0%,rgba(168,85,247,0.16),transparent_60%)] blur-2xl",
            "absolute inset-0 bg-[radial-gradient(500px_260px_at_100%_20%,rgba(139,92,246,0.12),transparent_60%)] blur-2xl",
        ],
        Backdrop::Gradient => &[
            "absolute inset-0 bg-gradient-to-br from-violet-100 via-white to-fuchsia-50 dark:from-[#140a24] dark:via-[#0b0b0f] dark:to-[#1a0b1f]",
        ],
        Backdrop::Aurora => &[
            "aurora-band absolute -top-1/3 left-[-20%] h-[70%] w-[80%] rounded-full bg-violet-400/25 blur-3xl animate-[aurora_18s_ease-in-out_infinite]",
            "aurora-band absolute top-0 right-[-25%] h-[60%] w-[70%] rounded-full bg-fuchsia-400/20 blur-3xl animate-[aurora_24s_ease-in-out_infinite_reverse]",
            "aurora-band absolute bottom-[-30%] left-1/4 h-[60%] w-[60%] rounded-full bg-sky-400/15 blur-3xl animate-[aurora_30s_ease-in-out_infinite]",
        ],
    }
}

/// Background layers drawn behind the page content.
#[component]
pub fn PageBackdrop(variant: Backdrop) -> impl IntoView {
    let layers = layer_classes(variant);
    view! {
        <div class=container_class(variant) aria-hidden="true">
            {layers.iter().copied().map(|class| view! { <div class=class></div> }).collect_view()}
        </div>
    }
}
