//! Project Card Component
//!
//! Grid tile with image, funding progress, backers and days left.
//! Clicking anywhere on the card opens the project modal.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::ProgressBar;
use crate::format::{format_currency, safe_image_url};
use crate::models::Project;
use crate::store::{AppStateStoreFields, store_open_project, use_app_store};

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let store = use_app_store();
    let id = project.id;
    let progress = project.progress_percent();
    let days_left = project.days_left(Utc::now());
    let image = safe_image_url(project.image_url.as_deref());

    view! {
        <div class="project-card" on:click=move |_| store_open_project(&store, id)>
            <div class="project-image">
                <img src=image alt=project.title.clone() />
            </div>
            <div class="project-content">
                <h3 class="project-title">{project.title.clone()}</h3>
                <p class="project-description">{project.description.clone()}</p>
                <div class="project-progress">
                    <div class="progress-labels">
                        <span class="progress-raised">
                            "Raised: " {format_currency(project.raised_amount)} " ₽"
                        </span>
                        <span class="progress-goal">"Goal: " {format_currency(project.goal)} " ₽"</span>
                    </div>
                    <ProgressBar percent=progress />
                </div>
                <div class="project-stats">
                    <span class="stat-item">{project.backers_count} " backers"</span>
                    <span class="stat-item">{days_left} " days left"</span>
                </div>
                <button class="btn-open">"Back this project"</button>
            </div>
        </div>
    }
}
