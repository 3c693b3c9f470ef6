//! Kind Selector Component
//!
//! Widget kind buttons for the add bar.

use leptos::prelude::*;

use crate::models::WidgetKind;

/// One button per widget kind, the current one highlighted
#[component]
pub fn KindSelector(
    current_kind: ReadSignal<WidgetKind>,
    on_change: impl Fn(WidgetKind) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="kind-selector">
            {WidgetKind::ALL.iter().copied().map(|kind| {
                let is_selected = move || current_kind.get() == kind;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "kind-btn active" } else { "kind-btn" }
                        on:click=move |_| on_change(kind)
                    >
                        {kind.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
