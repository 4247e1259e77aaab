//! Navigation Bar Component
//!
//! Page tabs plus the signed-in user.

use leptos::prelude::*;

use crate::store::{AppStateStoreFields, Route, store_navigate, use_app_store};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <header class="nav-bar">
            <span class="nav-brand">"Crowdfund"</span>
            <nav class="nav-links">
                {Route::NAV.iter().map(|&route| {
                    let is_active = move || store.route().get() == route;
                    view! {
                        <button
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |_| store_navigate(&store, route)
                        >
                            {route.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>
            <span class="nav-user">
                {move || store.current_user().get().map(|u| u.display_name().to_string())}
            </span>
        </header>
    }
}
