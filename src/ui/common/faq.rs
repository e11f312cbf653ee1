use leptos::prelude::*;

use crate::core::content::Faq;
use crate::core::motion::{STAGGER_STEP_MS, Transition};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::Motion;

/// Accordion of questions; each item opens and closes on its own
#[component]
pub fn FaqList(items: &'static [Faq]) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto space-y-4">
            {items
                .iter()
                .enumerate()
                .map(|(i, faq)| view! {
                    <Motion transition=Transition::REVEAL.staggered(i, STAGGER_STEP_MS)>
                        <FaqItem question=faq.question answer=faq.answer/>
                    </Motion>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="card bg-base-100 shadow-md overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-base-200 transition-colors"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get().to_string()
            >
                <span class="font-semibold text-lg">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 flex-shrink-0 transition-transform duration-300"
                    class:rotate-180=move || is_open.get()
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5"/>
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <p class="px-6 pb-4 opacity-80 leading-relaxed">{answer}</p>
            </div>
        </div>
    }
}
