use leptos::prelude::*;

use crate::profile::HeroContent;
use crate::reveal::Reveal;

use super::avatar::{Avatar, BackgroundOrbs};
use super::scroll_reveal::ScrollReveal;

#[component]
pub fn Hero(hero: &'static HeroContent) -> impl IntoView {
    let reveal = expect_context::<ScrollReveal>();
    // lines fade up once mounted, staggered by their delay-* classes
    let rise = move |base: &'static str| {
        move || format!("{base} {}", Reveal::RiseShort.classes(reveal.mounted()))
    };

    view! {
        <section class="relative overflow-hidden">
            <BackgroundOrbs />
            <div class="container mx-auto px-4 py-20 relative z-10">
                <div class=rise("text-center transition-all duration-1000")>
                    <Avatar avatar=hero.avatar.as_str() badge=hero.badge.as_str() />
                    <h1 class=rise(
                        "text-5xl md:text-7xl font-bold mb-4 bg-gradient-to-r from-blue-600 via-indigo-600 to-purple-600 dark:from-blue-400 dark:via-indigo-400 dark:to-purple-400 bg-clip-text text-transparent transition-all duration-1000 delay-100",
                    )>{hero.name.as_str()}</h1>
                    <p class=rise(
                        "text-xl md:text-2xl text-gray-700 dark:text-gray-300 mb-2 transition-all duration-1000 delay-200",
                    )>{hero.title.as_str()}</p>
                    <p class=rise(
                        "text-lg text-gray-600 dark:text-gray-400 mb-8 transition-all duration-1000 delay-300",
                    )>{hero.education.as_str()}</p>
                    <div class=rise(
                        "flex flex-wrap gap-3 justify-center mb-12 transition-all duration-1000 delay-400",
                    )>
                        {hero
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class=format!(
                                        "px-4 py-2 {} rounded-full font-medium hover:scale-110 transition-transform cursor-default",
                                        tag.palette.classes(),
                                    )>{tag.label.as_str()}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
