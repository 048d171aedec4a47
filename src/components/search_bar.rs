//! Search Bar Component
//!
//! Controlled input for the menu item name filter.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn SearchBar(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="menu-search-input"
            placeholder="Search menu items..."
            prop:value=move || query.get()
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                set_query.set(input.value());
            }
        />
    }
}
