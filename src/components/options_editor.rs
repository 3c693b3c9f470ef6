//! Options Editor Component
//!
//! Form generated from the kind's option descriptors. Each change writes
//! the record's full option map back through the store.

use leptos::prelude::*;

use crate::commands;
use crate::models::{OptionValue, WidgetRecord};
use crate::schema::{options_for, parse_input, OptionInput, OptionSpec};
use crate::store::{store_set_widgets, use_app_store, AppStore, AppStateStoreFields};

/// Set one option of the widget at `index` and persist the whole list
pub fn save_option(store: &AppStore, index: usize, key: &str, value: OptionValue) {
    let options = store
        .widgets()
        .with_untracked(|widgets| widgets.get(index).map(|w| w.options.clone()));
    let Some(mut options) = options else {
        log::warn!("[APP] No widget at {} to update", index);
        return;
    };
    options.insert(key.to_string(), Some(value));
    if let Ok(widgets) = commands::update_widget_options(index, options) {
        store_set_widgets(store, widgets);
    }
}

#[component]
pub fn OptionsEditor(index: usize, record: WidgetRecord) -> impl IntoView {
    let store = use_app_store();
    let specs = options_for(record.kind);

    let on_input = move |spec: OptionSpec, raw: String| {
        if let Some(value) = parse_input(&spec, &raw) {
            save_option(&store, index, spec.key, value);
        }
    };

    view! {
        <form class="options-editor" on:submit=|ev| ev.prevent_default()>
            {specs.iter().copied().map(|spec| {
                let current = record
                    .option(spec.key)
                    .cloned()
                    .unwrap_or_else(|| spec.default.to_value());
                match spec.input {
                    OptionInput::Toggle => view! {
                        <label class="option-row">
                            <input
                                type="checkbox"
                                prop:checked=current.as_bool().unwrap_or(false)
                                on:change=move |ev| on_input(spec, event_target_checked(&ev).to_string())
                            />
                            {spec.label}
                        </label>
                    }.into_any(),
                    OptionInput::Text => view! {
                        <label class="option-row">
                            {spec.label}
                            <input
                                type="text"
                                prop:value=current.as_text()
                                on:change=move |ev| on_input(spec, event_target_value(&ev))
                            />
                        </label>
                    }.into_any(),
                    OptionInput::Number => view! {
                        <label class="option-row">
                            {spec.label}
                            <input
                                type="number"
                                prop:value=current.as_text()
                                on:change=move |ev| on_input(spec, event_target_value(&ev))
                            />
                        </label>
                    }.into_any(),
                    OptionInput::TextArea => view! {
                        <label class="option-row">
                            {spec.label}
                            <textarea
                                prop:value=current.as_text()
                                on:change=move |ev| on_input(spec, event_target_value(&ev))
                            ></textarea>
                        </label>
                    }.into_any(),
                }
            }).collect_view()}
        </form>
    }
}
