//! Toolbar Component
//!
//! Edit mode toggle, the add-widget bar and "clear all".

use leptos::prelude::*;

use crate::commands;
use crate::components::{DeleteConfirmButton, KindSelector};
use crate::context::use_app_context;
use crate::models::{WidgetKind, WidgetRecord};
use crate::store::{store_set_widgets, use_app_store};

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (kind, set_kind) = signal(WidgetKind::Time);

    let add_widget = move |_| {
        let record = WidgetRecord::new_default(kind.get());
        if let Ok(widgets) = commands::insert_widget(record, None) {
            store_set_widgets(&store, widgets);
        }
    };

    let clear_all = move |_: ()| {
        if let Ok(widgets) = commands::clear_widgets() {
            store_set_widgets(&store, widgets);
        }
    };

    view! {
        <div class="toolbar">
            <button
                class=move || if ctx.editing.get() { "edit-toggle active" } else { "edit-toggle" }
                on:click=move |_| ctx.toggle_editing()
            >
                {move || if ctx.editing.get() { "Done" } else { "Edit" }}
            </button>

            <Show when=move || ctx.editing.get()>
                <div class="add-bar">
                    <KindSelector current_kind=kind on_change=move |k| set_kind.set(k) />
                    <button class="add-btn" on:click=add_widget>"Add"</button>
                    <DeleteConfirmButton
                        button_class="clear-btn"
                        label="Clear all"
                        prompt="Remove every widget?"
                        on_confirm=clear_all
                    />
                </div>
            </Show>
        </div>
    }
}
