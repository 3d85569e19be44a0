use leptos::prelude::*;

#[component]
pub fn Avatar(avatar: &'static str, badge: &'static str) -> impl IntoView {
    view! {
        <div class="mb-8 inline-block">
            <div class="relative">
                <div class="w-40 h-40 mx-auto rounded-full bg-gradient-to-br from-blue-500 via-indigo-500 to-purple-600 p-1 animate-gradient">
                    <div class="w-full h-full rounded-full bg-white dark:bg-slate-800 flex items-center justify-center text-6xl">
                        {avatar}
                    </div>
                </div>
                <div
                    class="absolute -bottom-2 -right-2 w-12 h-12 bg-green-500 rounded-full border-4 border-white dark:border-slate-800 flex items-center justify-center text-xl animate-scaleIn"
                    style="animation-delay: 0.5s"
                >
                    {badge}
                </div>
            </div>
        </div>
    }
}

/// Blurred colour blobs floating behind the hero.
#[component]
pub fn BackgroundOrbs() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute top-20 left-10 w-72 h-72 bg-blue-400/10 rounded-full blur-3xl animate-float"></div>
            <div
                class="absolute bottom-20 right-10 w-96 h-96 bg-indigo-400/10 rounded-full blur-3xl animate-float"
                style="animation-delay: 1s"
            ></div>
            <div
                class="absolute top-1/2 left-1/2 w-64 h-64 bg-purple-400/10 rounded-full blur-3xl animate-float"
                style="animation-delay: 2s"
            ></div>
        </div>
    }
}
