//! Funding Progress Bar

use leptos::prelude::*;

use crate::format::progress_width;

/// Horizontal bar filled to `percent`, capped at full width
#[component]
pub fn ProgressBar(percent: u32) -> impl IntoView {
    let width = format!("width: {}%", progress_width(percent));
    view! {
        <div class="progress-bar">
            <div class="progress-fill" style=width></div>
        </div>
    }
}
