use leptos::{either::Either, prelude::*};
use leptos_meta::{Meta, Title};

use crate::profile::Profile;

use super::footer::Footer;
use super::hero::Hero;
use super::scroll_reveal::use_scroll_reveal;
use super::sections::{About, Goals, Hobbies, Skills};

#[component]
pub fn HomePage() -> impl IntoView {
    let reveal = use_scroll_reveal();
    provide_context(reveal);

    let profile = match Profile::load() {
        Ok(profile) => profile,
        Err(err) => {
            log::error!("failed to load profile: {err}");
            return Either::Right(view! { <ProfileUnavailable /> });
        }
    };

    Either::Left(view! {
        <Title text=profile.hero.name.clone() />
        <Meta
            name="description"
            content=format!("{} - {}", profile.hero.name, profile.hero.title)
        />
        <Portfolio profile />
    })
}

/// The page body. Expects the scroll reveal handle in context.
#[component]
fn Portfolio(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 via-blue-50 to-indigo-50 dark:from-slate-900 dark:via-slate-800 dark:to-indigo-950">
            <Hero hero={&profile.hero} />
            <About about={&profile.about} />
            <Skills skills={&profile.skills} />
            <Hobbies hobbies={&profile.hobbies} />
            <Goals goals={&profile.goals} />
            <Footer text=profile.footer.as_str() />
        </div>
    }
}

#[component]
fn ProfileUnavailable() -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="min-h-screen flex items-center justify-center bg-slate-50 dark:bg-slate-900">
            <p class="text-lg text-gray-700 dark:text-gray-300">
                "This profile is temporarily unavailable."
            </p>
        </div>
    }
}
