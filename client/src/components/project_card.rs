//! Project card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure presentation of one [`Project`] record; optional fields simply drop
//! their markup.

use leptos::prelude::*;

use crate::content::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="group rounded-2xl border border-neutral-200 bg-white/80 p-5 shadow-sm transition-all hover:shadow-md dark:border-neutral-800 dark:bg-black/20 dark:hover:shadow-purple-500/10">
            <div class="relative mb-4 overflow-hidden rounded-xl border border-neutral-200 bg-neutral-50 dark:border-neutral-800 dark:bg-neutral-900">
                <div class="flex h-48 items-center justify-center text-sm text-neutral-400">"(Project image here)"</div>
            </div>

            <h4 class="text-xl font-semibold tracking-tight">{project.title}</h4>

            <div class="mt-1 flex flex-wrap items-center gap-x-3 gap-y-1 text-sm">
                {project.subtitle.map(|subtitle| view! { <span>{subtitle}</span> })}
                {project
                    .has_links()
                    .then(|| {
                        view! {
                            <span aria-hidden="true">"•"</span>
                            <nav class="flex flex-wrap gap-2">
                                {project
                                    .links
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                class="underline decoration-purple-400 underline-offset-2 hover:text-purple-600 dark:decoration-violet-500/50 dark:hover:text-violet-100 dark:hover:decoration-violet-300"
                                            >
                                                {link.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        }
                    })}
            </div>

            {project.caption.map(|caption| view! { <p class="mt-3 text-sm leading-relaxed">{caption}</p> })}
        </article>
    }
}
