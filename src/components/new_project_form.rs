//! New Project Form Component
//!
//! Form for launching a project. The signed-in user becomes its creator.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, SortBy};
use crate::context::use_app_context;
use crate::forms::ProjectForm;
use crate::store::{AppStateStoreFields, Route, ToastKind, store_navigate, store_run_search};

#[component]
pub fn NewProjectForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (form, set_form) = signal(ProjectForm::default());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let creator = store.current_user().get_untracked();
        let new_project = match form.get_untracked().validate(creator.as_ref()) {
            Ok(project) => project,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };
        set_error.set(None);

        spawn_local(async move {
            let api = commands::api();
            match commands::create_project(&api, &new_project).await {
                Ok(project) => {
                    ctx.notify(ToastKind::Success, format!("\"{}\" is live!", project.title));
                    set_form.set(ProjectForm::default());
                    if let Ok(categories) = commands::list_categories(&api).await {
                        store.categories().set(categories);
                    }
                    store.sort_by().set(SortBy::New);
                    store_run_search(&store);
                }
                Err(err) => set_error.set(Some(format!("Could not create project: {}", err))),
            }
        });
    };

    // one input bound to one ProjectForm field
    let field = move |placeholder: &'static str, kind: &'static str, get: fn(&ProjectForm) -> String, set: fn(&mut ProjectForm, String)| {
        view! {
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_form.update(|f| set(f, value));
                }
            />
        }
    };

    view! {
        <Show
            when=move || store.current_user().get().is_some()
            fallback=move || view! {
                <p class="hint">
                    "Please "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        store_navigate(&store, Route::Register);
                    }>"sign up"</a>
                    " before starting a project."
                </p>
            }
        >
            <form class="new-project-form" on:submit=on_submit>
                <h2>"Start a project"</h2>
                {field("Title", "text", |f| f.title.clone(), |f, v| f.title = v)}
                <textarea
                    placeholder="Describe your project (at least 20 characters)"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.description = value);
                    }
                ></textarea>
                {field("Image URL (optional)", "url", |f| f.image_url.clone(), |f, v| f.image_url = v)}
                {field("Goal, ₽", "number", |f| f.goal.clone(), |f, v| f.goal = v)}
                {field("Deadline", "date", |f| f.deadline.clone(), |f, v| f.deadline = v)}
                <input
                    type="text"
                    list="category-options"
                    placeholder="Category"
                    prop:value=move || form.with(|f| f.category.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.category = value);
                    }
                />
                <datalist id="category-options">
                    <For
                        each=move || store.categories().get()
                        key=|c| c.id
                        children=|category| view! { <option value=category.name></option> }
                    />
                </datalist>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button type="submit" class="btn-primary">"Launch"</button>
            </form>
        </Show>
    }
}
