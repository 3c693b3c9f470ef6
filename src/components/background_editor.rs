//! Background Editor Component
//!
//! Free-form inline style for the page container, stored verbatim.

use leptos::prelude::*;

use crate::commands;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BackgroundEditor() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="background-editor">
            <label>
                "Background style"
                <textarea
                    class="background-textarea"
                    prop:value=move || store.background().get()
                    on:change=move |ev| {
                        let style = event_target_value(&ev);
                        if commands::save_background(&style).is_ok() {
                            store.background().set(style);
                        }
                    }
                    placeholder="background: #202124;"
                ></textarea>
            </label>
        </div>
    }
}
