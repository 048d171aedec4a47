//! Shop Admin App
//!
//! Root component: provides the API context and declares the static route
//! table. No routing logic lives here beyond path matching.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{BrandDashboard, BrandOutletDashboard, OwnerDashboard, ShopDetail};
use crate::context::ApiContext;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiContext::from_env());

    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=OwnerDashboard/>
                    <Route path=path!("/ownerdashboard") view=OwnerDashboard/>
                    <Route path=path!("/branddashboard") view=BrandDashboard/>
                    <Route path=path!("/shop/:id") view=ShopDetail/>
                    <Route path=path!("/:title/branddashboard2/:id") view=BrandOutletDashboard/>
                </Routes>
            </main>
        </Router>
    }
}
