//! Project Grid Component

use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::models::Project;

/// Cards for `projects`, or an empty-state line
#[component]
pub fn ProjectGrid(#[prop(into)] projects: Signal<Vec<Project>>) -> impl IntoView {
    view! {
        <Show
            when=move || !projects.get().is_empty()
            fallback=|| view! { <p class="empty-state">"No projects found"</p> }
        >
            <div class="projects-grid">
                <For
                    each=move || projects.get()
                    // raised/backers change after a pledge, so they are part of the key
                    key=|p| (p.id, p.backers_count, p.raised_amount.to_bits())
                    children=move |project| view! { <ProjectCard project=project /> }
                />
            </div>
        </Show>
    }
}
