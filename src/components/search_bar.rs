//! Search Bar Component
//!
//! Search box, sort order and category filter. Enter, a sort or category
//! change, or the search button all run the search.

use leptos::prelude::*;

use crate::commands::SortBy;
use crate::store::{AppStateStoreFields, store_run_search, use_app_store};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();
    let search = move || store_run_search(&store);

    view! {
        <div class="search-bar" role="search">
            <input
                type="search"
                id="search-input"
                placeholder="Search projects..."
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        search();
                    }
                }
            />
            <select
                id="sort-select"
                prop:value=move || store.sort_by().get().as_str()
                on:change=move |ev| {
                    if let Ok(sort) = event_target_value(&ev).parse::<SortBy>() {
                        store.sort_by().set(sort);
                        search();
                    }
                }
            >
                {SortBy::ALL.iter().map(|sort| view! {
                    <option value=sort.as_str()>{sort.label()}</option>
                }).collect_view()}
            </select>
            <select
                id="category-select"
                prop:value=move || store.category().get().unwrap_or_default()
                on:change=move |ev| {
                    let name = event_target_value(&ev);
                    store.category().set((!name.is_empty()).then_some(name));
                    search();
                }
            >
                <option value="">"All categories"</option>
                <For
                    each=move || store.categories().get()
                    key=|c| c.id
                    children=move |category| {
                        let value = category.name.clone();
                        view! { <option value=value>{category.name}</option> }
                    }
                />
            </select>
            <button class="btn-search" on:click=move |_| search()>"Search"</button>
        </div>
    }
}
