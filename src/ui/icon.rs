use leptos::prelude::*;

use crate::core::IconName;

#[component]
pub fn Icon(
    /// Icon to draw
    name: IconName,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {name.paths().iter().map(|&d| view! { <path d=d /> }).collect_view()}
        </svg>
    }
}
