//! Project Modal Component
//!
//! Project details with recent pledges, reviews, and the pledge and
//! review forms. Closes on the × button or a click on the backdrop.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, Page, ResultExt};
use crate::components::{PledgeFormView, ProgressBar, ReviewFormView};
use crate::format::format_currency;
use crate::models::{Investment, Project, Review};
use crate::store::{AppStateStoreFields, store_close_project, use_app_store};

/// Pledges and reviews listed in the modal
const RECENT_LIMIT: u32 = 5;

#[component]
pub fn ProjectModal(project_id: u32) -> impl IntoView {
    let store = use_app_store();
    let (project, set_project) = signal(None::<Project>);
    let (investments, set_investments) = signal(Vec::<Investment>::new());
    let (reviews, set_reviews) = signal(Vec::<Review>::new());
    let (refresh, set_refresh) = signal(0u32);

    Effect::new(move |_| {
        let _ = refresh.get();
        spawn_local(async move {
            let api = commands::api();
            match commands::get_project(&api, project_id).await.ok_or_none() {
                Some(loaded) => set_project.set(Some(loaded)),
                // gone or unreachable: nothing to show
                None => {
                    store.open_project().set(None);
                    return;
                }
            }
            let page = Page::first(RECENT_LIMIT);
            set_investments.set(commands::list_project_investments(&api, project_id, page).await.or_fallback());
            set_reviews.set(commands::list_project_reviews(&api, project_id, page).await.or_fallback());
        });
    });

    let close = move || store_close_project(&store);

    view! {
        <div id="project-modal" class="modal-backdrop" on:click=move |_| close()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| close()>"×"</button>
                {move || project.get().map(|p| {
                    let progress = p.progress_percent();
                    view! {
                        <h2>{p.title.clone()}</h2>
                        <p>{p.description.clone()}</p>
                        <div class="modal-progress">
                            <p><strong>"Progress: " {progress} "%"</strong></p>
                            <ProgressBar percent=progress />
                            <p>"Raised: " {format_currency(p.raised_amount)} " / " {format_currency(p.goal)} " ₽"</p>
                            <p>"Backers: " {p.backers_count}</p>
                        </div>
                    }
                })}

                <PledgeFormView project_id=project_id />

                <section class="modal-investments">
                    <h3>"Recent pledges"</h3>
                    <For
                        each=move || investments.get()
                        key=|i| i.id
                        children=|investment| view! {
                            <div class="investment-row">
                                <span class="investment-amount">{format_currency(investment.amount)} " ₽"</span>
                                {investment.message.map(|m| view! { <span class="investment-message">{m}</span> })}
                            </div>
                        }
                    />
                </section>

                <section class="modal-reviews">
                    <h3>"Reviews"</h3>
                    <For
                        each=move || reviews.get()
                        key=|r| r.id
                        children=|review| view! {
                            <div class="review">
                                <span class="review-rating">{"★".repeat(review.rating.min(5) as usize)}</span>
                                <p>{review.text}</p>
                            </div>
                        }
                    />
                    <Show
                        when=move || store.current_user().get().is_some()
                        fallback=|| view! { <p class="hint">"Sign up to leave a review."</p> }
                    >
                        <ReviewFormView project_id=project_id on_saved=Callback::new(move |_: ()| set_refresh.update(|v| *v += 1)) />
                    </Show>
                </section>
            </div>
        </div>
    }
}
