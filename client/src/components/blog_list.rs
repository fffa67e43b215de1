//! Blog listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists author-written posts with markdown summaries. Each entry reveals on
//! scroll with the same stagger as the project grid.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::BlogPost;
use crate::util::markdown::render_markdown_html;
use crate::util::reveal::stagger_delay_ms;

#[component]
pub fn BlogList(posts: &'static [BlogPost]) -> impl IntoView {
    view! {
        <section class="mt-12">
            <h3 class="mb-4 text-lg font-medium">"Writing"</h3>
            <ul class="space-y-4">
                {posts
                    .iter()
                    .enumerate()
                    .map(|(idx, post)| {
                        let summary = render_markdown_html(post.summary_markdown);
                        view! {
                            <li>
                                <Reveal delay_ms=stagger_delay_ms(idx)>
                                    <article class="rounded-2xl border border-neutral-200 p-5 dark:border-neutral-800">
                                        <a href=post.href class="hover:text-purple-600 dark:hover:text-violet-100">
                                            <h4 class="text-lg font-semibold tracking-tight">{post.title}</h4>
                                        </a>
                                        <time datetime=post.date class="text-xs text-neutral-500 dark:text-violet-200/60">
                                            {post.date}
                                        </time>
                                        <div class="mt-2 text-sm leading-relaxed" inner_html=summary></div>
                                    </article>
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
