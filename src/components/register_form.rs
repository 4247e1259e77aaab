//! Registration Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::forms::RegistrationForm;
use crate::store::{AppStateStoreFields, Route, ToastKind, store_navigate};

/// Sign-up form; shows the signed-in user instead when there is one
#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = RegistrationForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            full_name: full_name.get_untracked(),
        };
        let new_user = match form.validate() {
            Ok(user) => user,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };
        set_error.set(None);

        spawn_local(async move {
            let api = commands::api();
            match commands::create_user(&api, &new_user).await {
                Ok(user) => {
                    ctx.notify(ToastKind::Success, format!("Welcome, {}!", user.display_name()));
                    ctx.sign_in(user);
                    store_navigate(&store, Route::Home);
                }
                Err(err) => set_error.set(Some(format!("Registration failed: {}", err))),
            }
        });
    };

    view! {
        <Show
            when=move || store.current_user().get().is_none()
            fallback=move || view! {
                <div class="signed-in">
                    <p>
                        "Signed in as "
                        {move || store.current_user().get().map(|u| u.display_name().to_string())}
                    </p>
                    <button on:click=move |_| ctx.sign_out()>"Sign out"</button>
                </div>
            }
        >
            <form class="register-form" on:submit=on_submit>
                <h2>"Create an account"</h2>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Full name (optional)"
                    prop:value=move || full_name.get()
                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button type="submit" class="btn-primary">"Sign up"</button>
            </form>
        </Show>
    }
}
