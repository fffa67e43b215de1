//! Author-curated page content and feature switches.
//!
//! Everything here is literal configuration. Nothing is fetched or computed;
//! editing the site means editing these constants.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Headline revealed by the typewriter.
pub const GREETING: &str = "Hey, I'm Nikki Rana, what's up?";

/// Section heading above the bio.
pub const INTRO_HEADING: &str = "My Portfolio";

pub const BIO_PARAGRAPHS: &[&str] = &[
    "I’m Nikki Rana, born and raised in Cambridge, now studying Systems Design \
     Engineering at the University of Waterloo. I focus on human factors: the \
     intersection of product, design, and how people actually experience tech. \
     I like the tiny details that make things easier and the bigger picture of \
     how design shapes lives.",
    "Outside of school I’ve organized coding competitions, mentored across \
     programs, joined panels, and when I’m not doing something vaguely \
     productive, I’m probably annoying my older siblings or cooking.",
];

/// Labelled destination attached to a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub caption: Option<&'static str>,
    pub links: &'static [ProjectLink],
}

impl Project {
    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }
}

const fn link(label: &'static str, href: &'static str) -> ProjectLink {
    ProjectLink { label, href }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "CTPC Coding Tournament",
        subtitle: Some("National student-run event · Ops, sponsorships, product"),
        caption: Some(
            "Scaled a cross-campus tournament; built ops workflows, sponsorship pipeline, and event tooling.",
        ),
        links: &[link("Overview", "#"), link("Photos", "#"), link("GitHub", "#")],
    },
    Project {
        title: "Human Factors Mini Lab",
        subtitle: Some("Usability studies · Task analysis · UI prototyping"),
        caption: Some(
            "Rapid studies on reach, visual angle, and interface flows; turned findings into design requirements.",
        ),
        links: &[link("Case Study", "#"), link("Figma", "#")],
    },
    Project {
        title: "Vim Essay",
        subtitle: Some("Writing · Developer tooling"),
        caption: Some("A defense of Vim’s longevity: efficiency, customizability, and a thriving community."),
        links: &[link("Read Post", "#"), link("MDX Source", "#")],
    },
    Project {
        title: "Portfolio Site",
        subtitle: Some("Rust · Leptos · Tailwind"),
        caption: Some("Personal site with a blog listing, lilac/black theme, and a simple project grid."),
        links: &[link("Live", "#"), link("Repo", "#")],
    },
];

/// Entry in the optional blog listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    /// ISO date, shown verbatim.
    pub date: &'static str,
    pub summary_markdown: &'static str,
    pub href: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Why Vim Is Still Here",
        date: "2025-03-14",
        summary_markdown: "Modal editing, *composable* motions, and a community that keeps \
                           reinventing it. A case for learning [Vim](https://www.vim.org) in 2025.",
        href: "#",
    },
    BlogPost {
        title: "Designing for Reach",
        date: "2025-01-20",
        summary_markdown: "Notes from a week of **reach and visual-angle** studies, and what \
                           they changed about a kiosk layout.",
        href: "#",
    },
];

/// Decorative layer drawn behind the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backdrop {
    /// Solid background only.
    Plain,
    /// Soft purple radial glow, dark mode only.
    #[default]
    Glow,
    /// Static diagonal gradient.
    Gradient,
    /// Slowly drifting blurred color bands.
    Aurora,
}

/// Optional page features. Visual variants of the site differ only here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteFeatures {
    pub theme_toggle: bool,
    pub blog: bool,
    pub backdrop: Backdrop,
}

pub const FEATURES: SiteFeatures = SiteFeatures { theme_toggle: true, blog: true, backdrop: Backdrop::Glow };
