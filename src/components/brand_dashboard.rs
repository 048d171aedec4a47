//! Brand Dashboard Screens
//!
//! Sibling screens to the shop detail view; they only surface the params the
//! route table extracts for them.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn BrandDashboard() -> impl IntoView {
    view! {
        <div class="dashboard">
            <h2 class="screen-heading">"Brand Dashboard"</h2>
            <p>"Select a brand outlet to continue."</p>
        </div>
    }
}

/// Per-outlet brand screen reached at `/:title/branddashboard2/:id`
#[component]
pub fn BrandOutletDashboard() -> impl IntoView {
    let params = use_params_map();
    let title = move || params.with(|p| p.get("title").unwrap_or_default());
    let brand_id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <div class="dashboard">
            <h2 class="screen-heading">{move || title()}</h2>
            <p class="brand-id">{move || format!("Brand id: {}", brand_id())}</p>
        </div>
    }
}
