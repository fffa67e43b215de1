//! Portfolio landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Composes the backdrop, optional theme toggle, typewriter
//! headline, bio, project grid, and optional blog listing from `content`.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::backdrop::PageBackdrop;
use crate::components::blog_list::BlogList;
use crate::components::project_card::ProjectCard;
use crate::components::reveal::Reveal;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::typewriter::TypewriterHeadline;
use crate::content::{BIO_PARAGRAPHS, BLOG_POSTS, FEATURES, GREETING, INTRO_HEADING, PROJECTS};
use crate::util::reveal::stagger_delay_ms;

#[component]
pub fn HomePage() -> impl IntoView {
    let features = FEATURES;

    view! {
        <Title text="Nikki Rana · Portfolio"/>
        <main class="relative min-h-screen overflow-hidden bg-white text-neutral-900 dark:bg-[#0b0b0f] dark:text-violet-100">
            <PageBackdrop variant=features.backdrop/>

            <div class="relative mx-auto max-w-5xl px-4 py-12">
                {features
                    .theme_toggle
                    .then(|| {
                        view! {
                            <div class="mb-6 flex items-center justify-end">
                                <ThemeToggle/>
                            </div>
                        }
                    })}

                <TypewriterHeadline message=GREETING/>

                <header class="mb-10">
                    <h2 class="text-3xl font-semibold tracking-tight">{INTRO_HEADING}</h2>
                    {BIO_PARAGRAPHS
                        .iter()
                        .copied()
                        .map(|paragraph| {
                            view! { <p class="mt-3 max-w-2xl text-neutral-700 dark:text-violet-200/80">{paragraph}</p> }
                        })
                        .collect_view()}
                </header>

                <section class="mt-6">
                    <h3 class="mb-4 text-lg font-medium">"Projects"</h3>
                    <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                        {PROJECTS
                            .iter()
                            .copied()
                            .enumerate()
                            .map(|(idx, project)| {
                                view! {
                                    <Reveal delay_ms=stagger_delay_ms(idx)>
                                        <ProjectCard project=project/>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                {features.blog.then(|| view! { <BlogList posts=BLOG_POSTS/> })}
            </div>
        </main>
    }
}
