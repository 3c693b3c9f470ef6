//! Widget List Component
//!
//! Renders the widgets in stored order. In edit mode each frame carries
//! move/remove controls and the options form.

use leptos::prelude::*;

use crate::commands;
use crate::components::{DeleteConfirmButton, OptionsEditor, WidgetBody};
use crate::context::use_app_context;
use crate::models::WidgetRecord;
use crate::store::{store_set_widgets, use_app_store, AppStateStoreFields};

#[component]
pub fn WidgetList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="widget-list">
            // Widgets have no stable id, so the whole list re-renders on change
            {move || {
                let widgets = store.widgets().get();
                let len = widgets.len();
                widgets
                    .into_iter()
                    .enumerate()
                    .map(|(index, record)| view! { <WidgetFrame index=index len=len record=record /> })
                    .collect_view()
            }}
        </div>
    }
}

/// One widget plus its edit-mode controls
#[component]
fn WidgetFrame(index: usize, len: usize, record: WidgetRecord) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let kind = record.kind;
    let editor_record = record.clone();

    let move_to = move |to: usize| {
        if let Ok(widgets) = commands::move_widget(index, to) {
            store_set_widgets(&store, widgets);
        }
    };

    let remove = move |_: ()| {
        if let Ok(widgets) = commands::remove_widget(index) {
            store_set_widgets(&store, widgets);
        }
    };

    view! {
        <div class=format!("widget t{}", kind.tag())>
            <WidgetBody index=index record=record />

            <Show when=move || ctx.editing.get()>
                <div class="widget-controls">
                    <span class="widget-kind">{kind.label()}</span>
                    <button
                        class="move-btn"
                        disabled={index == 0}
                        on:click=move |_| move_to(index.saturating_sub(1))
                    >
                        "↑"
                    </button>
                    <button
                        class="move-btn"
                        disabled={index + 1 >= len}
                        on:click=move |_| move_to(index + 1)
                    >
                        "↓"
                    </button>
                    <DeleteConfirmButton button_class="delete-btn" on_confirm=remove />
                </div>
                <OptionsEditor index=index record=editor_record.clone() />
            </Show>
        </div>
    }
}
