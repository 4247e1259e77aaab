//! Toast Component

use leptos::prelude::*;

use crate::store::{AppStateStoreFields, ToastKind, store_dismiss_toast, use_app_store};

/// Current toast, if any. Clicking dismisses it early.
#[component]
pub fn ToastView() -> impl IntoView {
    let store = use_app_store();

    move || {
        store.toast().get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast success",
                ToastKind::Error => "toast error",
            };
            let id = toast.id;
            view! {
                <div class=class role="status" on:click=move |_| store_dismiss_toast(&store, id)>
                    {toast.message}
                </div>
            }
        })
    }
}
