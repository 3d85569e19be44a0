use leptos::prelude::*;

#[component]
pub fn Footer(text: &'static str) -> impl IntoView {
    view! {
        <footer class="bg-slate-900 dark:bg-black text-white py-8">
            <div class="container mx-auto px-4 text-center">
                <p class="text-gray-400">{text}</p>
            </div>
        </footer>
    }
}
