//! Pledge Form Component
//!
//! Amount, name and comment for backing the open project. Guests are
//! registered on the fly by the pledge flow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::MIN_PLEDGE;
use crate::context::use_app_context;
use crate::error::PledgeError;
use crate::forms::PledgeForm;
use crate::pledge::submit_pledge;
use crate::store::{AppStateStoreFields, ToastKind, store_pledge_recorded};

#[component]
pub fn PledgeFormView(project_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let initial_name = store
        .current_user()
        .get_untracked()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    let (amount, set_amount) = signal(String::new());
    let (name, set_name) = signal(initial_name);
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = PledgeForm {
            amount: amount.get_untracked(),
            name: name.get_untracked(),
            message: message.get_untracked(),
        };
        let current_user = store.current_user().get_untracked();
        set_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let api = commands::api();
            let now_ms = js_sys::Date::now() as i64;
            let result = submit_pledge(&api, project_id, &form, current_user.as_ref(), now_ms, |user| {
                ctx.sign_in(user.clone())
            })
            .await;
            set_submitting.set(false);

            match result {
                Ok(_) => {
                    ctx.notify(ToastKind::Success, "Thank you for your support! Your pledge has been saved.");
                    store_pledge_recorded(&store);
                }
                Err(PledgeError::Invalid(err)) => set_error.set(Some(err.to_string())),
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                    ctx.notify(ToastKind::Error, err.to_string());
                }
            }
        });
    };

    view! {
        <form class="pledge-form" on:submit=on_submit>
            <label>"Amount (₽)"</label>
            <input
                type="number"
                min=MIN_PLEDGE
                placeholder="1000"
                prop:value=move || amount.get()
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />
            <label>"Your name"</label>
            <input
                type="text"
                placeholder="Full name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <label>"Comment"</label>
            <textarea
                placeholder="Leave a few words for the team..."
                prop:value=move || message.get()
                on:input=move |ev| set_message.set(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Saving..." } else { "Back this project" }}
            </button>
        </form>
    }
}
