//! Platform Statistics Bar

use leptos::prelude::*;

use crate::format::format_currency;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_store();
    let stats = move || store.statistics().get();

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <span class="stat-value">{move || stats().total_projects}</span>
                <span class="stat-label">"Projects"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || format_currency(stats().total_raised)}</span>
                <span class="stat-label">"Raised, ₽"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || stats().total_backers}</span>
                <span class="stat-label">"Backers"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || stats().total_users}</span>
                <span class="stat-label">"Members"</span>
            </div>
        </div>
    }
}
