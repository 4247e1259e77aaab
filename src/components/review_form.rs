//! Review Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::forms::ReviewForm;
use crate::store::{AppStateStoreFields, ToastKind};

/// Review text and 1-5 rating; `on_saved` runs after the backend accepts it
#[component]
pub fn ReviewFormView(project_id: u32, #[prop(into)] on_saved: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (text, set_text) = signal(String::new());
    let (rating, set_rating) = signal(5u8);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ReviewForm { text: text.get_untracked(), rating: rating.get_untracked() };
        let review = match form.validate(project_id, store.current_user().get_untracked().as_ref()) {
            Ok(review) => review,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };
        set_error.set(None);

        spawn_local(async move {
            let api = commands::api();
            match commands::create_review(&api, &review).await {
                Ok(_) => {
                    set_text.set(String::new());
                    ctx.notify(ToastKind::Success, "Thanks for the review!");
                    on_saved.run(());
                }
                Err(err) => set_error.set(Some(format!("Could not save review: {}", err))),
            }
        });
    };

    view! {
        <form class="review-form" on:submit=on_submit>
            <textarea
                placeholder="What do you think of this project?"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            ></textarea>
            <select
                prop:value=move || rating.get().to_string()
                on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                        set_rating.set(value);
                    }
                }
            >
                {(1..=5u8).rev().map(|r| view! { <option value=r.to_string()>{"★".repeat(r as usize)}</option> }).collect_view()}
            </select>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button type="submit">"Post review"</button>
        </form>
    }
}
