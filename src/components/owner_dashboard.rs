//! Owner Dashboard Screen
//!
//! Landing screen for operators; navigation shell only.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn OwnerDashboard() -> impl IntoView {
    view! {
        <div class="dashboard">
            <h2 class="screen-heading">"Owner Dashboard"</h2>
            <p>"Open a shop to manage its menu."</p>
            <nav class="dashboard-nav">
                <A href="/branddashboard">"Brand dashboard"</A>
            </nav>
        </div>
    }
}
