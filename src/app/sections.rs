use leptos::prelude::*;

use crate::profile::{AboutContent, GoalsContent, HobbiesContent, SkillsContent};
use crate::reveal::{stagger, transition_delay, Reveal, Section};

use super::scroll_reveal::ScrollReveal;

const SKILL_STAGGER_MS: u32 = 150;
const HOBBY_STAGGER_MS: u32 = 200;
const HOBBY_NOTE_DELAY_MS: u32 = 400;
const GOAL_STAGGER_MS: u32 = 200;

fn revealed(section: Section) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
    let reveal = expect_context::<ScrollReveal>();
    move || reveal.is_revealed(section)
}

#[component]
pub fn About(about: &'static AboutContent) -> impl IntoView {
    let shown = revealed(Section::About);
    view! {
        <section class="py-16 px-4" id=Section::About.id() data-scroll-section="">
            <div class="container mx-auto max-w-4xl">
                <div class=move || {
                    format!(
                        "bg-white/70 dark:bg-slate-800/70 backdrop-blur-lg rounded-3xl shadow-2xl p-8 md:p-12 transition-all duration-1000 {}",
                        Reveal::Rise.classes(shown()),
                    )
                }>
                    <h2 class="text-3xl md:text-4xl font-bold mb-6 bg-gradient-to-r from-blue-600 to-indigo-600 dark:from-blue-400 dark:to-indigo-400 bg-clip-text text-transparent">
                        {about.heading.as_str()}
                    </h2>
                    {about
                        .paragraphs
                        .iter()
                        .map(|p| {
                            view! {
                                <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed mb-4 last:mb-0">
                                    {p.as_str()}
                                </p>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills(skills: &'static SkillsContent) -> impl IntoView {
    let shown = revealed(Section::Skills);
    view! {
        <section class="py-16 px-4" id=Section::Skills.id() data-scroll-section="">
            <div class="container mx-auto max-w-6xl">
                <h2 class=move || {
                    format!(
                        "text-3xl md:text-4xl font-bold text-center mb-12 bg-gradient-to-r from-blue-600 to-indigo-600 dark:from-blue-400 dark:to-indigo-400 bg-clip-text text-transparent transition-all duration-1000 {}",
                        Reveal::Rise.classes(shown()),
                    )
                }>{skills.heading.as_str()}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {skills
                        .items
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "group bg-white/70 dark:bg-slate-800/70 backdrop-blur-lg rounded-2xl p-6 shadow-lg hover:shadow-2xl transition-all duration-700 hover:-translate-y-2 {}",
                                            Reveal::Rise.classes(shown()),
                                        )
                                    }
                                    style=move || {
                                        transition_delay(shown(), stagger(index, SKILL_STAGGER_MS))
                                    }
                                >
                                    <div class="text-5xl mb-4 group-hover:scale-125 transition-transform duration-300">
                                        {skill.icon.as_str()}
                                    </div>
                                    <h3 class="text-xl font-bold mb-2 text-gray-800 dark:text-gray-200">
                                        {skill.name.as_str()}
                                    </h3>
                                    <div class=format!(
                                        "h-2 rounded-full bg-gradient-to-r {} group-hover:h-3 transition-all duration-300",
                                        skill.color,
                                    )></div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Hobbies(hobbies: &'static HobbiesContent) -> impl IntoView {
    let shown = revealed(Section::Hobbies);
    view! {
        <section class="py-16 px-4" id=Section::Hobbies.id() data-scroll-section="">
            <div class="container mx-auto max-w-6xl">
                <h2 class=move || {
                    format!(
                        "text-3xl md:text-4xl font-bold text-center mb-12 bg-gradient-to-r from-purple-600 to-pink-600 dark:from-purple-400 dark:to-pink-400 bg-clip-text text-transparent transition-all duration-1000 {}",
                        Reveal::Rise.classes(shown()),
                    )
                }>{hobbies.heading.as_str()}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {hobbies
                        .items
                        .iter()
                        .enumerate()
                        .map(|(index, hobby)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "group bg-white/70 dark:bg-slate-800/70 backdrop-blur-lg rounded-3xl p-8 shadow-xl hover:shadow-2xl transition-all duration-700 hover:-translate-y-2 {}",
                                            Reveal::alternating(index).classes(shown()),
                                        )
                                    }
                                    style=move || {
                                        transition_delay(shown(), stagger(index, HOBBY_STAGGER_MS))
                                    }
                                >
                                    <div class="flex items-start gap-4">
                                        <div
                                            class="text-6xl group-hover:scale-110 transition-transform duration-300 animate-float"
                                            style=format!("animation-delay: {}s", index as f32 * 0.5)
                                        >
                                            {hobby.icon.as_str()}
                                        </div>
                                        <div class="flex-1">
                                            <h3 class="text-2xl font-bold mb-3 text-gray-800 dark:text-gray-200">
                                                {hobby.name.as_str()}
                                            </h3>
                                            <p class="text-gray-600 dark:text-gray-400 text-lg leading-relaxed">
                                                {hobby.description.as_str()}
                                            </p>
                                            <div class=format!(
                                                "mt-4 h-1 rounded-full bg-gradient-to-r {} group-hover:h-2 transition-all duration-300",
                                                hobby.color,
                                            )></div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div
                    class=move || {
                        format!(
                            "mt-12 bg-gradient-to-r from-blue-500/10 to-purple-500/10 dark:from-blue-500/20 dark:to-purple-500/20 rounded-3xl p-8 border border-blue-200/50 dark:border-blue-700/50 transition-all duration-1000 {}",
                            Reveal::RiseShort.classes(shown()),
                        )
                    }
                    style=move || transition_delay(shown(), HOBBY_NOTE_DELAY_MS)
                >
                    <p class="text-lg text-gray-700 dark:text-gray-300 text-center leading-relaxed">
                        {hobbies.note.as_str()}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Goals(goals: &'static GoalsContent) -> impl IntoView {
    let shown = revealed(Section::Goals);
    view! {
        <section class="py-16 px-4 pb-24" id=Section::Goals.id() data-scroll-section="">
            <div class="container mx-auto max-w-4xl">
                <div class=move || {
                    format!(
                        "bg-gradient-to-br from-blue-600 to-indigo-600 dark:from-blue-700 dark:to-indigo-800 rounded-3xl shadow-2xl p-8 md:p-12 text-white transition-all duration-1000 {}",
                        Reveal::Zoom.classes(shown()),
                    )
                }>
                    <h2 class="text-3xl md:text-4xl font-bold mb-6 flex items-center gap-3">
                        <span class="animate-float">{goals.icon.as_str()}</span>
                        {goals.heading.as_str()}
                    </h2>
                    <div class="space-y-4 text-lg leading-relaxed">
                        {goals
                            .items
                            .iter()
                            .enumerate()
                            .map(|(index, goal)| {
                                view! {
                                    <div
                                        class=move || {
                                            format!(
                                                "flex items-start gap-3 hover:translate-x-2 transition-all duration-700 {}",
                                                Reveal::NudgeFromLeft.classes(shown()),
                                            )
                                        }
                                        style=move || {
                                            transition_delay(
                                                shown(),
                                                stagger(index + 1, GOAL_STAGGER_MS),
                                            )
                                        }
                                    >
                                        <span class="text-2xl">"✅"</span>
                                        <p>{goal.as_str()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
